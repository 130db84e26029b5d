use schema::TroopType;
use std::fmt;

/// Main error type for the battleline engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Error related to rules data loading or validation
    Rules(RulesError),
    /// Error related to army composition input
    Composition(CompositionError),
}

/// Errors related to rules data loading and validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// No baseline attributes entry for a troop kind
    MissingBaseStats(TroopType),
    /// No tier curve entry for a troop kind
    MissingTierCurve(TroopType),
    /// A tier curve does not cover every tier
    IncompleteTierCurve(TroopType),
    /// No target priority entry for a troop kind
    MissingTargetPriority(TroopType),
    /// A target priority list is not a permutation of all troop kinds
    InvalidTargetPriority(TroopType),
    /// The siege range table does not cover every tier
    IncompleteSiegeRanges(usize),
    /// Rules file could not be read
    Io(String),
    /// Rules file is not valid RON
    Parse(String),
}

/// Errors related to army composition input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// Tier is outside the supported progression
    InvalidTier(u8),
    /// No prefab army with the given id
    UnknownPrefab(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Rules(err) => write!(f, "Rules error: {}", err),
            EngineError::Composition(err) => write!(f, "Composition error: {}", err),
        }
    }
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::MissingBaseStats(kind) => {
                write!(f, "No base stats for troop kind: {:?}", kind)
            }
            RulesError::MissingTierCurve(kind) => {
                write!(f, "No tier curve for troop kind: {:?}", kind)
            }
            RulesError::IncompleteTierCurve(kind) => {
                write!(f, "Tier curve does not cover every tier: {:?}", kind)
            }
            RulesError::MissingTargetPriority(kind) => {
                write!(f, "No target priority for troop kind: {:?}", kind)
            }
            RulesError::InvalidTargetPriority(kind) => {
                write!(f, "Target priority is not a permutation of all kinds: {:?}", kind)
            }
            RulesError::IncompleteSiegeRanges(len) => {
                write!(f, "Siege range table has {} entries", len)
            }
            RulesError::Io(details) => write!(f, "Could not read rules file: {}", details),
            RulesError::Parse(details) => write!(f, "Malformed rules data: {}", details),
        }
    }
}

impl fmt::Display for CompositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositionError::InvalidTier(tier) => write!(f, "Invalid tier: {}", tier),
            CompositionError::UnknownPrefab(id) => write!(f, "Unknown prefab army: {}", id),
        }
    }
}

impl std::error::Error for EngineError {}
impl std::error::Error for RulesError {}
impl std::error::Error for CompositionError {}

impl From<RulesError> for EngineError {
    fn from(err: RulesError) -> Self {
        EngineError::Rules(err)
    }
}

impl From<CompositionError> for EngineError {
    fn from(err: CompositionError) -> Self {
        EngineError::Composition(err)
    }
}

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// Type alias for Results using RulesError
pub type RulesResult<T> = Result<T, RulesError>;

/// Type alias for Results using CompositionError
pub type CompositionResult<T> = Result<T, CompositionError>;
