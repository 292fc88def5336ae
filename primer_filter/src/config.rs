/// The padding used in the original amplicon protocol.
pub const PADDING: u32 = 5;

pub const DEFAULT_CONFIG: Config = Config { padding: PADDING };

/// A configure struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Extra bases added to a primer region on the side facing the amplicon.
    pub padding: u32,
}

impl Default for Config {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Padding:{}", self.padding)
    }
}

impl Config {
    pub fn new(padding: u32) -> Self {
        Self { padding }
    }
}
