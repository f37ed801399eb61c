use layout_engine::types::EngineError;
use layout_engine::Engine;
use wardrobe_types::{DrawerId, PanelId, PanelKind, Point};

/// Errors from harness helpers and assertions.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Add a shelf at height `y`, in the section containing `cross_x`.
pub fn add_shelf(engine: &mut Engine, y: f64, cross_x: f64) -> Result<PanelId, HarnessError> {
    Ok(engine.add_panel(PanelKind::Shelf, y, cross_x)?)
}

/// Add a divider at `x`, in the section containing `cross_y`.
pub fn add_divider(engine: &mut Engine, x: f64, cross_y: f64) -> Result<PanelId, HarnessError> {
    Ok(engine.add_panel(PanelKind::Divider, x, cross_y)?)
}

/// Add a single drawer in the cell containing `(x, y)`.
pub fn add_drawer(engine: &mut Engine, x: f64, y: f64) -> Result<DrawerId, HarnessError> {
    let mut created = engine.create_drawer(Point::new(x, y), 1)?;
    created.pop().ok_or(HarnessError::AssertionFailed {
        detail: "create_drawer returned success but no drawer".to_string(),
    })
}

/// Add a drawer stack of `count` slots in the cell containing `(x, y)`.
pub fn add_drawer_stack(
    engine: &mut Engine,
    x: f64,
    y: f64,
    count: usize,
) -> Result<Vec<DrawerId>, HarnessError> {
    Ok(engine.create_drawer(Point::new(x, y), count)?)
}

/// Move a panel along its main axis, leaving the cross coordinate in place.
pub fn move_to(engine: &mut Engine, id: &PanelId, main_pos: f64) -> Result<(), HarnessError> {
    Ok(engine.move_panel(id, Point::new(main_pos, main_pos))?)
}
