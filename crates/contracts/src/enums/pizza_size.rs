use serde::{Deserialize, Serialize};

/// Menu size of a pizza
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PizzaSize {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
    #[serde(rename = "XL")]
    XLarge,
    #[serde(rename = "XXL")]
    XXLarge,
}

impl PizzaSize {
    /// Code as it appears in the source tables
    pub fn code(&self) -> &'static str {
        match self {
            PizzaSize::Small => "S",
            PizzaSize::Medium => "M",
            PizzaSize::Large => "L",
            PizzaSize::XLarge => "XL",
            PizzaSize::XXLarge => "XXL",
        }
    }

    pub fn all() -> Vec<PizzaSize> {
        vec![
            PizzaSize::Small,
            PizzaSize::Medium,
            PizzaSize::Large,
            PizzaSize::XLarge,
            PizzaSize::XXLarge,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "S" => Some(PizzaSize::Small),
            "M" => Some(PizzaSize::Medium),
            "L" => Some(PizzaSize::Large),
            "XL" => Some(PizzaSize::XLarge),
            "XXL" => Some(PizzaSize::XXLarge),
            _ => None,
        }
    }
}

impl std::fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
