use serde::{Deserialize, Serialize};

use crate::error::StakeError;

/// Supported network clusters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cluster {
    Mainnet,
    Devnet,
    Testnet,
}

impl Cluster {
    /// Public RPC endpoint for this cluster
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Cluster::Mainnet => "https://api.mainnet-beta.solana.com",
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
        }
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Cluster::Mainnet => "Mainnet Beta",
            Cluster::Devnet => "Devnet",
            Cluster::Testnet => "Testnet",
        }
    }

    /// Whether this is a test cluster
    pub fn is_test(&self) -> bool {
        !matches!(self, Cluster::Mainnet)
    }
}

/// Durability guarantee requested when waiting for confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl Commitment {
    /// The commitment string used by RPC endpoints
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

/// Startup configuration: the staking program to target and the cluster to
/// submit on. Built once at process start and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeConfig {
    /// The staking program address
    #[serde(with = "serde_address")]
    pub program: [u8; 32],
    pub cluster: Cluster,
}

impl StakeConfig {
    /// Parse the program address and fix the cluster.
    pub fn new(program: &str, cluster: Cluster) -> Result<Self, StakeError> {
        Ok(Self {
            program: sol_tx::parse_address(program)?,
            cluster,
        })
    }

    /// Load the configuration from JSON, e.g.
    /// `{"program": "oreV2Zy...", "cluster": "Devnet"}`.
    pub fn from_json(text: &str) -> Result<Self, StakeError> {
        serde_json::from_str(text).map_err(|e| StakeError::Config(e.to_string()))
    }
}

/// Base58 representation for the program address in config files.
mod serde_address {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&sol_tx::format_address(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 32], D::Error> {
        let text = String::deserialize(deserializer)?;
        sol_tx::parse_address(&text).map_err(serde::de::Error::custom)
    }
}

/// The raw form input for one stake request: token mint address, pool
/// address, and the amount as entered. A plain data record so validation
/// and encoding stay independent of any rendering mechanism.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StakeRequest {
    pub mint: String,
    pub pool: String,
    pub amount: String,
}

/// Phases of one submission attempt. Every transition is driven by a single
/// external call; a failure at any point ends the attempt in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Building,
    AwaitingSignature,
    Submitted,
    Confirmed,
    Failed,
}
