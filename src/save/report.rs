use serde::Deserialize;
use serde::Serialize;

/// completion notification for one conversion run: where the hands went
/// and how many made it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub destination: String,
    pub hands: usize,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "converted {} hands into {}", self.hands, self.destination)
    }
}
