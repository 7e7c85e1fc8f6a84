/// Environment tag selecting the B2B gateway base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Internal development gateway.
    Dev,
    /// User acceptance testing.
    Uat,
    /// Public sandbox.
    #[default]
    Sandbox,
    /// Development sandbox.
    SandboxDev,
    /// Production.
    Prod,
    /// Next-generation development gateway.
    NewDev,
}

impl Environment {
    /// Base URL for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Dev => "https://newapidev.bni.co.id:8066",
            Environment::Uat => "https://newapidev.bni.co.id:8065",
            Environment::Sandbox => "https://sandbox.bni.co.id",
            Environment::SandboxDev => "https://sandbox.dglapm.id",
            Environment::Prod => "https://api.bni.co.id",
            Environment::NewDev => "https://sb-dev-in.dglapm.id",
        }
    }
}
