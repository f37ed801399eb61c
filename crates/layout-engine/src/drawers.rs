//! Drawer creation and recomputation.

use drawer_ops::SectionEnvelope;
use tracing::warn;
use wardrobe_types::config::{MAX_STACK_COUNT, MIN_DRAWER_HEIGHT};
use wardrobe_types::{BoundaryRef, BoundarySide, DrawerId, Point, Span, StackId};

use crate::types::{Drawer, DrawerConnections, EngineError, StackSlot};
use crate::Engine;

impl Engine {
    /// Create a drawer, or a stack of `stack_count` drawers partitioning the
    /// section height evenly, in the cell under `at`.
    ///
    /// The cell's four boundaries become the drawer connections (virtual
    /// ones where the cell runs to the carcass). Fails without changing the
    /// model if any slot cannot satisfy the drawer size constraints or no
    /// standard box length fits; a later slot failing rolls back the slots
    /// already created.
    pub fn create_drawer(
        &mut self,
        at: Point,
        stack_count: usize,
    ) -> Result<Vec<DrawerId>, EngineError> {
        if stack_count == 0 || stack_count > MAX_STACK_COUNT {
            return Err(EngineError::InvalidStackCount {
                count: stack_count,
                max: MAX_STACK_COUNT,
            });
        }

        let cell = self.find_cell(at);
        let bottom_edge = self.boundary_edge(&cell.bottom, BoundarySide::Bottom)?;
        let top_edge = self.boundary_edge(&cell.top, BoundarySide::Top)?;
        let slot_height = (top_edge - bottom_edge) / stack_count as f64;
        if slot_height < MIN_DRAWER_HEIGHT {
            return Err(EngineError::SlotTooShort {
                height: slot_height,
                min: MIN_DRAWER_HEIGHT,
            });
        }

        let saved_drawer_counter = self.next_drawer_id;
        let saved_stack_counter = self.next_stack_id;
        let stack_id = if stack_count > 1 {
            let id = StackId(self.next_stack_id);
            self.next_stack_id += 1;
            Some(id)
        } else {
            None
        };

        let mut created: Vec<DrawerId> = Vec::with_capacity(stack_count);
        for index in 0..stack_count {
            let id = DrawerId::new(self.next_drawer_id);
            self.next_drawer_id += 1;

            let drawer = Drawer {
                id: id.clone(),
                connections: DrawerConnections {
                    bottom: Some(cell.bottom.clone()),
                    top: Some(cell.top.clone()),
                    left: Some(cell.left.clone()),
                    right: Some(cell.right.clone()),
                },
                stack: stack_id.map(|sid| StackSlot {
                    id: sid,
                    index,
                    count: stack_count,
                }),
                volume: None,
                box_length: None,
                parts: None,
                is_open: false,
            };
            self.drawers.insert(id.clone(), drawer);

            if let Err(error) = self.refresh_drawer(&id) {
                // Roll back the whole stack; the graph ends up unchanged.
                self.drawers.remove(&id);
                for slot in &created {
                    self.drawers.remove(slot);
                }
                self.next_drawer_id = saved_drawer_counter;
                self.next_stack_id = saved_stack_counter;
                return Err(error);
            }
            created.push(id);
        }

        self.commit();
        Ok(created)
    }

    /// Recompute a drawer's volume, box length and parts from its current
    /// connections and the live carcass.
    pub(crate) fn refresh_drawer(&mut self, id: &DrawerId) -> Result<(), EngineError> {
        let drawer = self
            .drawers
            .get(id)
            .ok_or_else(|| EngineError::DrawerNotFound { id: id.clone() })?;
        let stack = drawer.stack;

        let require = |c: &Option<BoundaryRef>, side: BoundarySide| {
            c.clone().ok_or_else(|| {
                warn!(drawer = %id, %side, "drawer is missing a required connection");
                EngineError::MissingConnection {
                    id: id.clone(),
                    side,
                }
            })
        };
        let bottom = require(&drawer.connections.bottom, BoundarySide::Bottom)?;
        let top = require(&drawer.connections.top, BoundarySide::Top)?;
        let left = require(&drawer.connections.left, BoundarySide::Left)?;
        let right = require(&drawer.connections.right, BoundarySide::Right)?;

        // The drawer cannot run deeper than its most recessed boundary.
        let max_rank = [&bottom, &top, &left, &right]
            .into_iter()
            .map(|b| self.boundary_rank(b))
            .max()
            .unwrap_or(0);
        let depth = self.cabinet.inner_depth() - max_rank as f64;

        let envelope = SectionEnvelope {
            x: Span::new(
                self.boundary_edge(&left, BoundarySide::Left)?,
                self.boundary_edge(&right, BoundarySide::Right)?,
            ),
            y: Span::new(
                self.boundary_edge(&bottom, BoundarySide::Bottom)?,
                self.boundary_edge(&top, BoundarySide::Top)?,
            ),
            depth,
        };

        let volume = drawer_ops::drawer_volume(&envelope, stack.map(|s| (s.index, s.count)))?;
        let box_length = drawer_ops::select_box_length(volume.z.len())?;
        let parts = drawer_ops::derive_parts(&volume, box_length);

        let drawer = self.drawers.get_mut(id).expect("drawer looked up above");
        drawer.volume = Some(volume);
        drawer.box_length = Some(box_length);
        drawer.parts = Some(parts);
        Ok(())
    }

    pub(crate) fn refresh_all_drawers(&mut self) {
        let ids: Vec<DrawerId> = self.drawers.keys().cloned().collect();
        for id in ids {
            if let Err(error) = self.refresh_drawer(&id) {
                warn!(drawer = %id, %error, "drawer recomputation failed");
            }
        }
    }
}
