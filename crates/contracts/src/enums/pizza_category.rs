use serde::{Deserialize, Serialize};

/// Menu section a pizza type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PizzaCategory {
    Classic,
    Chicken,
    Supreme,
    Veggie,
}

impl PizzaCategory {
    pub fn code(&self) -> &'static str {
        match self {
            PizzaCategory::Classic => "Classic",
            PizzaCategory::Chicken => "Chicken",
            PizzaCategory::Supreme => "Supreme",
            PizzaCategory::Veggie => "Veggie",
        }
    }

    pub fn all() -> Vec<PizzaCategory> {
        vec![
            PizzaCategory::Classic,
            PizzaCategory::Chicken,
            PizzaCategory::Supreme,
            PizzaCategory::Veggie,
        ]
    }

    /// Parse from the source code, case-insensitive
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        PizzaCategory::all()
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }
}

impl std::fmt::Display for PizzaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
