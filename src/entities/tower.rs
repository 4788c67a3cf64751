// 🗼 Tower Entity - The four residential towers

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    pub id: u8,
    pub name: String,
    pub floors: u8,
    pub completed: u16,
}

pub struct TowerRegistry {
    towers: Vec<Tower>,
}

impl TowerRegistry {
    pub fn with_defaults() -> Self {
        let towers = [(1, 38, 2001), (2, 38, 2002), (3, 45, 2005), (4, 45, 2006)]
            .into_iter()
            .map(|(id, floors, completed)| Tower {
                id,
                name: format!("Tower {}", id),
                floors,
                completed,
            })
            .collect();

        TowerRegistry { towers }
    }

    pub fn all(&self) -> &[Tower] {
        &self.towers
    }

    pub fn find_by_id(&self, id: u8) -> Option<&Tower> {
        self.towers.iter().find(|t| t.id == id)
    }
}

impl Default for TowerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
