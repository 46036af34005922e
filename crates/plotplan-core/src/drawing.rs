//! Boundary drawing state machine.
//!
//! Models vertex-by-vertex polygon construction, editing, and deletion as an
//! explicit state machine with discrete input events, independent of any
//! mapping library's event names. The drawing surface feeds events in; the
//! plan store consumes the emitted outcomes.

use crate::models::{Boundary, LatLng};

/// Current interaction mode of the drawing surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// No interaction in progress
    Idle,
    /// Vertices are being placed for a new boundary
    Drawing { vertices: Vec<LatLng> },
    /// An existing boundary's vertices are being moved
    Editing { original: Boundary, working: Vec<LatLng> },
}

/// Discrete input events from the drawing surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingEvent {
    StartDrawing,
    AddVertex(LatLng),
    FinishDrawing,
    CancelDrawing,
    StartEditing(Boundary),
    MoveVertex { index: usize, to: LatLng },
    FinishEditing,
    CancelEditing,
    DeleteBoundary,
}

/// Geometry changes the store should apply
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingOutcome {
    BoundaryCreated(Boundary),
    BoundaryEdited(Boundary),
    BoundaryDeleted,
}

/// One drawing interaction session.
///
/// Events that do not apply in the current state are ignored rather than
/// treated as errors; the surface may deliver stale events after a mode
/// switch.
#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
    state: DrawingState,
}

impl Default for DrawingState {
    fn default() -> Self {
        DrawingState::Idle
    }
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// Feed one event through the machine, returning the outcome the store
    /// should apply, if any.
    pub fn handle(&mut self, event: DrawingEvent) -> Option<DrawingOutcome> {
        match (&mut self.state, event) {
            (DrawingState::Idle, DrawingEvent::StartDrawing) => {
                self.state = DrawingState::Drawing { vertices: Vec::new() };
                None
            }
            (DrawingState::Idle, DrawingEvent::StartEditing(boundary)) => {
                let working = boundary.points().to_vec();
                self.state = DrawingState::Editing { original: boundary, working };
                None
            }
            (DrawingState::Idle, DrawingEvent::DeleteBoundary) => {
                Some(DrawingOutcome::BoundaryDeleted)
            }
            (DrawingState::Drawing { vertices }, DrawingEvent::AddVertex(point)) => {
                vertices.push(point);
                None
            }
            (DrawingState::Drawing { vertices }, DrawingEvent::FinishDrawing) => {
                let boundary = Boundary::new(std::mem::take(vertices));
                self.state = DrawingState::Idle;
                // Fewer than 3 vertices cannot enclose area; discard the attempt.
                if boundary.is_usable() {
                    Some(DrawingOutcome::BoundaryCreated(boundary))
                } else {
                    tracing::warn!(
                        vertices = boundary.len(),
                        "discarding boundary with fewer than 3 vertices"
                    );
                    None
                }
            }
            (DrawingState::Drawing { .. }, DrawingEvent::CancelDrawing) => {
                self.state = DrawingState::Idle;
                None
            }
            (DrawingState::Editing { working, .. }, DrawingEvent::MoveVertex { index, to }) => {
                if let Some(vertex) = working.get_mut(index) {
                    *vertex = to;
                }
                None
            }
            (DrawingState::Editing { working, .. }, DrawingEvent::FinishEditing) => {
                let boundary = Boundary::new(std::mem::take(working));
                self.state = DrawingState::Idle;
                Some(DrawingOutcome::BoundaryEdited(boundary))
            }
            (DrawingState::Editing { .. }, DrawingEvent::CancelEditing) => {
                self.state = DrawingState::Idle;
                None
            }
            // Stale or out-of-order event for the current mode
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<LatLng> {
        vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 10.0),
            LatLng::new(10.0, 10.0),
            LatLng::new(10.0, 0.0),
        ]
    }

    #[test]
    fn draws_a_boundary() {
        let mut session = DrawingSession::new();
        assert_eq!(session.handle(DrawingEvent::StartDrawing), None);
        for point in square() {
            assert_eq!(session.handle(DrawingEvent::AddVertex(point)), None);
        }
        let outcome = session.handle(DrawingEvent::FinishDrawing);
        assert_eq!(outcome, Some(DrawingOutcome::BoundaryCreated(Boundary::new(square()))));
        assert_eq!(session.state(), &DrawingState::Idle);
    }

    #[test]
    fn discards_degenerate_boundary() {
        let mut session = DrawingSession::new();
        session.handle(DrawingEvent::StartDrawing);
        session.handle(DrawingEvent::AddVertex(LatLng::new(0.0, 0.0)));
        session.handle(DrawingEvent::AddVertex(LatLng::new(1.0, 1.0)));
        assert_eq!(session.handle(DrawingEvent::FinishDrawing), None);
        assert_eq!(session.state(), &DrawingState::Idle);
    }

    #[test]
    fn cancel_drops_vertices() {
        let mut session = DrawingSession::new();
        session.handle(DrawingEvent::StartDrawing);
        session.handle(DrawingEvent::AddVertex(LatLng::new(0.0, 0.0)));
        assert_eq!(session.handle(DrawingEvent::CancelDrawing), None);
        assert_eq!(session.state(), &DrawingState::Idle);
    }

    #[test]
    fn edits_a_vertex() {
        let mut session = DrawingSession::new();
        session.handle(DrawingEvent::StartEditing(Boundary::new(square())));
        session.handle(DrawingEvent::MoveVertex { index: 2, to: LatLng::new(12.0, 12.0) });
        let outcome = session.handle(DrawingEvent::FinishEditing);
        match outcome {
            Some(DrawingOutcome::BoundaryEdited(boundary)) => {
                assert_eq!(boundary.points()[2], LatLng::new(12.0, 12.0));
                assert_eq!(boundary.len(), 4);
            }
            other => panic!("expected edited boundary, got {other:?}"),
        }
    }

    #[test]
    fn cancel_editing_restores_idle_without_outcome() {
        let mut session = DrawingSession::new();
        session.handle(DrawingEvent::StartEditing(Boundary::new(square())));
        session.handle(DrawingEvent::MoveVertex { index: 0, to: LatLng::new(-5.0, -5.0) });
        assert_eq!(session.handle(DrawingEvent::CancelEditing), None);
        assert_eq!(session.state(), &DrawingState::Idle);
    }

    #[test]
    fn delete_emits_outcome_from_idle() {
        let mut session = DrawingSession::new();
        assert_eq!(
            session.handle(DrawingEvent::DeleteBoundary),
            Some(DrawingOutcome::BoundaryDeleted)
        );
    }

    #[test]
    fn stale_events_are_ignored() {
        let mut session = DrawingSession::new();
        assert_eq!(session.handle(DrawingEvent::AddVertex(LatLng::new(0.0, 0.0))), None);
        assert_eq!(session.handle(DrawingEvent::FinishDrawing), None);
        assert_eq!(session.state(), &DrawingState::Idle);
    }

    #[test]
    fn out_of_range_vertex_move_is_ignored() {
        let mut session = DrawingSession::new();
        session.handle(DrawingEvent::StartEditing(Boundary::new(square())));
        session.handle(DrawingEvent::MoveVertex { index: 99, to: LatLng::new(1.0, 1.0) });
        match session.handle(DrawingEvent::FinishEditing) {
            Some(DrawingOutcome::BoundaryEdited(boundary)) => {
                assert_eq!(boundary.points(), Boundary::new(square()).points());
            }
            other => panic!("expected edited boundary, got {other:?}"),
        }
    }
}
