use std::fmt;

/// One top-level partition of the registry directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Mainnet,
    Testnet,
    Devnet,
    InternalDevnet,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Tier::Mainnet,
        Tier::Testnet,
        Tier::Devnet,
        Tier::InternalDevnet,
    ];

    /// Directory name under the registry root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Tier::Mainnet => "mainnet",
            Tier::Testnet => "testnet",
            Tier::Devnet => "devnet",
            Tier::InternalDevnet => "internal-devnet",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Mainnet => "Mainnet",
            Tier::Testnet => "Testnet",
            Tier::Devnet => "Devnet",
            Tier::InternalDevnet => "Internal Devnet",
        };
        f.write_str(name)
    }
}
