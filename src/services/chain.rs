use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Chains served by the Etherscan V2 multichain endpoint, selected through `chainid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChainId {
    #[default]
    EthereumMainnet,
    Sepolia,
    Holesky,
    BnbSmartChain,
    Polygon,
    ArbitrumOne,
    Optimism,
    Base,
    Other(u64),
}

impl ChainId {
    pub fn id(self) -> u64 {
        match self {
            ChainId::EthereumMainnet => 1,
            ChainId::Sepolia => 11_155_111,
            ChainId::Holesky => 17_000,
            ChainId::BnbSmartChain => 56,
            ChainId::Polygon => 137,
            ChainId::ArbitrumOne => 42_161,
            ChainId::Optimism => 10,
            ChainId::Base => 8_453,
            ChainId::Other(id) => id,
        }
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        match id {
            1 => ChainId::EthereumMainnet,
            11_155_111 => ChainId::Sepolia,
            17_000 => ChainId::Holesky,
            56 => ChainId::BnbSmartChain,
            137 => ChainId::Polygon,
            42_161 => ChainId::ArbitrumOne,
            10 => ChainId::Optimism,
            8_453 => ChainId::Base,
            other => ChainId::Other(other),
        }
    }
}

impl From<ChainId> for u64 {
    fn from(chain: ChainId) -> Self {
        chain.id()
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for ChainId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(ChainId::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_round_trip() {
        for chain in [
            ChainId::EthereumMainnet,
            ChainId::Sepolia,
            ChainId::Holesky,
            ChainId::BnbSmartChain,
            ChainId::Polygon,
            ChainId::ArbitrumOne,
            ChainId::Optimism,
            ChainId::Base,
        ] {
            assert_eq!(ChainId::from(chain.id()), chain);
        }
    }

    #[test]
    fn unknown_ids_are_kept() {
        assert_eq!(ChainId::from(59_144), ChainId::Other(59_144));
        assert_eq!(ChainId::Other(59_144).to_string(), "59144");
    }

    #[test]
    fn parses_decimal() {
        assert_eq!("1".parse::<ChainId>().unwrap(), ChainId::EthereumMainnet);
        assert_eq!(" 8453 ".parse::<ChainId>().unwrap(), ChainId::Base);
        assert!("0x1".parse::<ChainId>().is_err());
    }
}
