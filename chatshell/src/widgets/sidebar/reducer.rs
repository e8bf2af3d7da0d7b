use std::time::Instant;

use iced::{Task, keyboard};

use super::drag::{DragSession, GestureKind};
use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::hotkey;
use super::model::{SidebarWidthStore, WidthMutation};
use super::state::SidebarState;

/// Context for sidebar reduction: the reduction timestamp and the store
/// that owns the sidebar width.
pub(crate) struct SidebarCtx<'a> {
    pub(crate) now: Instant,
    pub(crate) store: &'a mut dyn SidebarWidthStore,
}

/// Reduce a sidebar intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SidebarState,
    event: SidebarIntent,
    ctx: &mut SidebarCtx<'_>,
) -> Task<SidebarEvent> {
    match event {
        SidebarIntent::DragHandlePressed => {
            start_drag(state, ctx);
            Task::none()
        },
        SidebarIntent::CursorMoved { position }
        | SidebarIntent::DragMoved { position } => {
            state.update_cursor(position);
            apply_drag_move(state, position.x, ctx);
            Task::none()
        },
        SidebarIntent::DragReleased => finish_drag(state, ctx),
        SidebarIntent::KeyPressed(event) => match key_effect(&event) {
            Some(advance) => effect(advance),
            None => Task::none(),
        },
        SidebarIntent::SessionPressed { index } => {
            effect(SidebarEffect::SelectSession { index })
        },
        SidebarIntent::NewSessionPressed => {
            effect(SidebarEffect::CreateSession)
        },
        SidebarIntent::DeleteSessionPressed => {
            effect(SidebarEffect::DeleteCurrentSession)
        },
    }
}

fn effect(effect: SidebarEffect) -> Task<SidebarEvent> {
    Task::done(SidebarEvent::Effect(effect))
}

/// Effect dispatched for a key event, if it is a session hotkey.
fn key_effect(event: &keyboard::Event) -> Option<SidebarEffect> {
    hotkey::session_step(event)
        .map(|delta| SidebarEffect::AdvanceSession { delta })
}

fn start_drag(state: &mut SidebarState, ctx: &mut SidebarCtx<'_>) {
    if state.is_dragging() {
        log::debug!("sidebar drag restarted before release");
    }

    let session = DragSession::begin(
        state.cursor().x,
        ctx.store.sidebar_width(),
        ctx.now,
    );
    state.begin_drag(session);
}

fn apply_drag_move(state: &mut SidebarState, x: f32, ctx: &mut SidebarCtx<'_>) {
    let Some(session) = state.drag_mut() else {
        return;
    };

    if let Some(width) = session.on_move(x, ctx.now) {
        ctx.store.update_sidebar_width(WidthMutation::Set(width));
    }
}

fn finish_drag(
    state: &mut SidebarState,
    ctx: &mut SidebarCtx<'_>,
) -> Task<SidebarEvent> {
    let Some(session) = state.end_drag() else {
        return Task::none();
    };

    match session.classify(ctx.now) {
        GestureKind::Click => {
            log::debug!("sidebar handle clicked, toggling narrow mode");
            ctx.store
                .update_sidebar_width(WidthMutation::ToggleNarrow);
        },
        GestureKind::Drag => {
            log::debug!(
                "sidebar drag finished: {}px -> {}px",
                session.start_width(),
                ctx.store.sidebar_width()
            );
        },
    }

    effect(SidebarEffect::GestureEnded)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use iced::Point;
    use iced::keyboard::{self, Key, Location, Modifiers, key};

    use super::{SidebarCtx, key_effect};
    use crate::widgets::sidebar::SidebarEffect;
    use crate::widgets::sidebar::model::{
        DEFAULT_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH, MIN_SIDEBAR_WIDTH,
        NARROW_SIDEBAR_WIDTH, SidebarWidthStore, WidthMutation,
    };
    use crate::widgets::sidebar::{SidebarIntent, SidebarWidget};

    struct RecordingStore {
        width: u32,
        writes: Vec<WidthMutation>,
    }

    impl RecordingStore {
        fn with_width(width: u32) -> Self {
            Self {
                width,
                writes: Vec::new(),
            }
        }
    }

    impl SidebarWidthStore for RecordingStore {
        fn sidebar_width(&self) -> u32 {
            self.width
        }

        fn update_sidebar_width(&mut self, mutation: WidthMutation) {
            self.width = mutation.apply(self.width);
            self.writes.push(mutation);
        }
    }

    struct Harness {
        widget: SidebarWidget,
        store: RecordingStore,
        base: Instant,
    }

    impl Harness {
        fn new(width: u32) -> Self {
            Self {
                widget: SidebarWidget::new(),
                store: RecordingStore::with_width(width),
                base: Instant::now(),
            }
        }

        fn send(&mut self, intent: SidebarIntent, millis: u64) {
            let mut ctx = SidebarCtx {
                now: self.base + Duration::from_millis(millis),
                store: &mut self.store,
            };
            let _task = self.widget.reduce(intent, &mut ctx);
        }

        fn press_at(&mut self, x: f32, millis: u64) {
            self.send(
                SidebarIntent::CursorMoved {
                    position: Point::new(x, 10.0),
                },
                millis,
            );
            self.send(SidebarIntent::DragHandlePressed, millis);
        }

        fn move_to(&mut self, x: f32, millis: u64) {
            self.send(
                SidebarIntent::DragMoved {
                    position: Point::new(x, 10.0),
                },
                millis,
            );
        }
    }

    fn arrow_down_pressed(modifiers: Modifiers) -> keyboard::Event {
        keyboard::Event::KeyPressed {
            key: Key::Named(key::Named::ArrowDown),
            modified_key: Key::Named(key::Named::ArrowDown),
            physical_key: key::Physical::Code(key::Code::ArrowDown),
            location: Location::Standard,
            modifiers,
            text: None,
            repeat: false,
        }
    }

    fn arrow_down_released(modifiers: Modifiers) -> keyboard::Event {
        keyboard::Event::KeyReleased {
            key: Key::Named(key::Named::ArrowDown),
            modified_key: Key::Named(key::Named::ArrowDown),
            physical_key: key::Physical::Code(key::Code::ArrowDown),
            location: Location::Standard,
            modifiers,
        }
    }

    #[test]
    fn given_handle_press_when_reduced_then_drag_session_starts() {
        let mut harness = Harness::new(DEFAULT_SIDEBAR_WIDTH);

        harness.press_at(300.0, 0);

        assert!(harness.widget.is_dragging());
        assert!(harness.store.writes.is_empty());
    }

    #[test]
    fn given_release_at_299ms_without_movement_when_reduced_then_width_toggles()
     {
        let mut harness = Harness::new(DEFAULT_SIDEBAR_WIDTH);
        harness.press_at(300.0, 0);

        harness.send(SidebarIntent::DragReleased, 299);

        assert_eq!(harness.store.width, NARROW_SIDEBAR_WIDTH);
        assert_eq!(harness.store.writes, vec![WidthMutation::ToggleNarrow]);
        assert!(!harness.widget.is_dragging());
    }

    #[test]
    fn given_release_at_301ms_without_movement_when_reduced_then_width_is_unchanged()
     {
        let mut harness = Harness::new(DEFAULT_SIDEBAR_WIDTH);
        harness.press_at(300.0, 0);

        harness.send(SidebarIntent::DragReleased, 301);

        assert_eq!(harness.store.width, DEFAULT_SIDEBAR_WIDTH);
        assert!(harness.store.writes.is_empty());
        assert!(!harness.widget.is_dragging());
    }

    #[test]
    fn given_narrow_sidebar_when_handle_clicked_then_default_width_is_restored()
    {
        let mut harness = Harness::new(NARROW_SIDEBAR_WIDTH);
        harness.press_at(100.0, 0);

        harness.send(SidebarIntent::DragReleased, 120);

        assert_eq!(harness.store.width, DEFAULT_SIDEBAR_WIDTH);
    }

    #[test]
    fn given_short_drag_when_released_then_partial_width_is_not_kept() {
        let mut harness = Harness::new(DEFAULT_SIDEBAR_WIDTH);
        harness.press_at(300.0, 0);
        harness.move_to(340.0, 50);
        assert_eq!(harness.store.width, DEFAULT_SIDEBAR_WIDTH + 40);

        harness.send(SidebarIntent::DragReleased, 150);

        assert_eq!(harness.store.width, NARROW_SIDEBAR_WIDTH);
    }

    #[test]
    fn given_move_stream_every_1ms_for_100ms_when_reduced_then_writes_are_throttled()
     {
        let mut harness = Harness::new(DEFAULT_SIDEBAR_WIDTH);
        harness.press_at(300.0, 0);

        for millis in 1..=100_u64 {
            harness.move_to(300.0 + millis as f32, millis);
        }

        let writes = harness.store.writes.len();
        assert!(writes >= 1);
        assert!(writes <= 6, "expected at most 6 writes, got {writes}");
    }

    #[test]
    fn given_drag_far_left_when_moved_then_width_snaps_to_narrow() {
        let mut harness = Harness::new(DEFAULT_SIDEBAR_WIDTH);
        harness.press_at(300.0, 0);

        harness.move_to(-400.0, 400);

        assert_eq!(harness.store.width, NARROW_SIDEBAR_WIDTH);
    }

    #[test]
    fn given_drag_far_right_when_released_then_width_is_capped() {
        let mut harness = Harness::new(DEFAULT_SIDEBAR_WIDTH);
        harness.press_at(300.0, 0);

        harness.move_to(2_000.0, 400);
        harness.send(SidebarIntent::DragReleased, 500);

        assert_eq!(harness.store.width, MAX_SIDEBAR_WIDTH);
    }

    #[test]
    fn given_any_drag_delta_when_moved_then_stored_width_respects_bounds() {
        for delta in (-600..=600).step_by(13) {
            let mut harness = Harness::new(DEFAULT_SIDEBAR_WIDTH);
            harness.press_at(400.0, 0);

            harness.move_to(400.0 + delta as f32, 350);

            let width = harness.store.width;
            assert!(
                width == NARROW_SIDEBAR_WIDTH
                    || (MIN_SIDEBAR_WIDTH..=MAX_SIDEBAR_WIDTH).contains(&width),
                "delta {delta} produced {width}"
            );
        }
    }

    #[test]
    fn given_no_active_drag_when_pointer_moves_or_releases_then_store_is_untouched()
     {
        let mut harness = Harness::new(DEFAULT_SIDEBAR_WIDTH);

        harness.move_to(10.0, 10);
        harness.send(SidebarIntent::DragReleased, 20);

        assert!(harness.store.writes.is_empty());
        assert!(!harness.widget.is_dragging());
    }

    #[test]
    fn given_new_gesture_when_started_then_width_snapshot_is_taken_from_store() {
        let mut harness = Harness::new(DEFAULT_SIDEBAR_WIDTH);
        harness.press_at(300.0, 0);
        harness.move_to(350.0, 400);
        harness.send(SidebarIntent::DragReleased, 500);

        harness.press_at(350.0, 1_000);
        harness.move_to(360.0, 1_400);

        assert_eq!(harness.store.width, DEFAULT_SIDEBAR_WIDTH + 60);
    }

    #[test]
    fn given_release_right_after_press_when_reduced_then_click_ends_gesture() {
        let mut harness = Harness::new(DEFAULT_SIDEBAR_WIDTH);
        harness.press_at(300.0, 0);

        harness.send(SidebarIntent::DragReleased, 0);
        harness.move_to(480.0, 40);
        harness.send(SidebarIntent::DragReleased, 40);

        assert!(!harness.widget.is_dragging());
        assert_eq!(harness.store.width, NARROW_SIDEBAR_WIDTH);
        assert_eq!(harness.store.writes, vec![WidthMutation::ToggleNarrow]);
    }

    #[test]
    fn given_active_drag_when_content_cursor_moves_then_width_follows() {
        let mut harness = Harness::new(DEFAULT_SIDEBAR_WIDTH);
        harness.press_at(300.0, 0);

        harness.send(
            SidebarIntent::CursorMoved {
                position: Point::new(330.0, 10.0),
            },
            30,
        );
        harness.move_to(330.0, 35);

        assert_eq!(harness.store.width, DEFAULT_SIDEBAR_WIDTH + 30);
        assert_eq!(
            harness.store.writes,
            vec![WidthMutation::Set(DEFAULT_SIDEBAR_WIDTH + 30)]
        );
    }

    #[test]
    fn given_ctrl_arrow_down_press_when_mapped_then_single_forward_advance() {
        assert_eq!(
            key_effect(&arrow_down_pressed(Modifiers::CTRL)),
            Some(SidebarEffect::AdvanceSession { delta: 1 })
        );
    }

    #[test]
    fn given_plain_arrow_down_press_when_mapped_then_no_effect() {
        assert_eq!(key_effect(&arrow_down_pressed(Modifiers::empty())), None);
    }

    #[test]
    fn given_arrow_down_release_when_mapped_then_no_effect() {
        assert_eq!(key_effect(&arrow_down_released(Modifiers::CTRL)), None);
    }

    #[test]
    fn given_hotkey_during_idle_sidebar_when_reduced_then_width_is_untouched() {
        let mut harness = Harness::new(DEFAULT_SIDEBAR_WIDTH);

        harness.send(
            SidebarIntent::KeyPressed(arrow_down_pressed(Modifiers::ALT)),
            0,
        );

        assert!(harness.store.writes.is_empty());
        assert!(!harness.widget.is_dragging());
    }
}
