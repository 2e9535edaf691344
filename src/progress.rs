//! Player progress: collected ingredients, completed dishes and score.
//!
//! Every mutation writes the whole snapshot through to the store. A broken
//! snapshot is thrown away and the player starts fresh; nothing here fails
//! visibly.

use serde::{Deserialize, Serialize};

use crate::console;
use crate::store::Store;

/// Storage key of the snapshot. Shared with earlier releases of the game.
pub const STORAGE_KEY: &str = "tatarCookingProgress";

/// Points awarded for each newly completed dish.
pub const DISH_REWARD: u32 = 100;

/// Number of dishes in the master class (эчпочмак, кыстыбый, чак-чак, чай).
pub const DISH_COUNT: usize = 4;

/// Persisted snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameState {
    pub collected_ingredients: Vec<String>,
    pub completed_dishes: Vec<String>,
    pub score: u32,
}

impl GameState {
    /// Read the snapshot from `store`, falling back to an empty state.
    ///
    /// An unparsable value is removed so the next save starts clean.
    pub fn load<S: Store>(store: &mut S) -> GameState {
        let Some(json) = store.get(STORAGE_KEY) else {
            return GameState::default();
        };

        match serde_json::from_str::<GameState>(&json) {
            Ok(mut state) => {
                state.dedupe();
                state
            }
            Err(e) => {
                console::warn(&format!("failed to parse saved progress, discarding it: {e}"));
                store.remove(STORAGE_KEY);
                GameState::default()
            }
        }
    }

    pub fn has_ingredient(&self, id: &str) -> bool {
        self.collected_ingredients.iter().any(|i| i == id)
    }

    pub fn has_dish(&self, id: &str) -> bool {
        self.completed_dishes.iter().any(|d| d == id)
    }

    /// Older snapshots were plain arrays and could carry repeats.
    fn dedupe(&mut self) {
        dedupe_keep_order(&mut self.collected_ingredients);
        dedupe_keep_order(&mut self.completed_dishes);
    }
}

fn dedupe_keep_order(ids: &mut Vec<String>) {
    let mut seen: Vec<String> = Vec::with_capacity(ids.len());
    ids.retain(|id| {
        if seen.contains(id) {
            false
        } else {
            seen.push(id.clone());
            true
        }
    });
}

/// Owns the game state and its persistence.
pub struct ProgressTracker<S: Store> {
    state: GameState,
    store: S,
}

impl<S: Store> ProgressTracker<S> {
    /// Restore the tracker from whatever `store` holds.
    pub fn load(mut store: S) -> Self {
        let state = GameState::load(&mut store);
        Self { state, store }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Record a collected ingredient. Persists only when the set changes.
    pub fn add_ingredient(&mut self, id: &str) {
        if self.state.has_ingredient(id) {
            return;
        }
        self.state.collected_ingredients.push(id.to_string());
        self.save();
    }

    pub fn has_ingredient(&self, id: &str) -> bool {
        self.state.has_ingredient(id)
    }

    /// Mark a dish complete and award `DISH_REWARD`. Repeats are ignored.
    pub fn complete_dish(&mut self, id: &str) {
        if self.state.has_dish(id) {
            return;
        }
        self.state.completed_dishes.push(id.to_string());
        self.state.score = self.state.score.saturating_add(DISH_REWARD);
        self.save();
    }

    pub fn has_completed(&self, id: &str) -> bool {
        self.state.has_dish(id)
    }

    /// Completed dishes as a percentage of `DISH_COUNT`, capped at 100.
    pub fn dish_progress_percent(&self) -> f64 {
        let done = self.state.completed_dishes.len().min(DISH_COUNT);
        done as f64 / DISH_COUNT as f64 * 100.0
    }

    /// Write the whole snapshot. Failures are logged and otherwise ignored.
    pub fn save(&mut self) {
        let json = match serde_json::to_string(&self.state) {
            Ok(j) => j,
            Err(e) => {
                console::warn(&format!("failed to serialize progress: {e}"));
                return;
            }
        };

        if let Err(e) = self.store.set(STORAGE_KEY, &json) {
            console::warn(&format!("failed to save progress: {e}"));
        }
    }
}
