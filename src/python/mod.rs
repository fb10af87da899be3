//! Python bindings for the backgammon engine.
//!
//! # Quick Start
//!
//! ```python
//! import random
//! import rust_gammon as gammon
//!
//! game = gammon.Backgammon(seed=42, turn_zero=True)
//! done = False
//! while not done:
//!     done = game.action(random.choice(game.legal_actions()))
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

use crate::core::{ACTION_SPACE, CHECKERS, HOME_POINTS, PIPS_COUNT, POINTS};

/// rust_gammon: a small-board backgammon engine for self-play training.
#[pymodule]
fn rust_gammon(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBackgammon>()?;

    m.add("ACTION_SPACE", ACTION_SPACE)?;
    m.add("POINTS", POINTS)?;
    m.add("CHECKERS", CHECKERS)?;
    m.add("HOME_POINTS", HOME_POINTS)?;
    m.add("PIPS_COUNT", PIPS_COUNT)?;

    Ok(())
}
