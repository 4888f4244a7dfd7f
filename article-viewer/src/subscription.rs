use iced::event::{self, Event};
use iced::{Subscription, mouse, touch, window};

use crate::app::{App, AppEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let cursor_subs = event::listen_with(cursor_moved);

    let mut subs = vec![win_subs, cursor_subs];

    // Presses are only forwarded while the open drawer listens for them.
    if app.widgets.article_params.is_listening() {
        subs.push(event::listen_with(pointer_pressed));
    }

    Subscription::batch(subs)
}

fn cursor_moved(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<AppEvent> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(AppEvent::CursorMoved(position))
        },
        _ => None,
    }
}

/// Captured presses count too: a click on any widget outside the drawer
/// still dismisses it.
fn pointer_pressed(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<AppEvent> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(AppEvent::PointerPressed(None))
        },
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(AppEvent::PointerPressed(Some(position)))
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use iced::event::{Event, Status};
    use iced::{Point, mouse, touch, window};

    use super::{cursor_moved, pointer_pressed};
    use crate::app::AppEvent;

    #[test]
    fn given_cursor_move_when_filtered_then_position_is_forwarded() {
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(10.0, 20.0),
        });

        let result = cursor_moved(event, Status::Ignored, window::Id::unique());

        assert!(matches!(
            result,
            Some(AppEvent::CursorMoved(position))
                if position == Point::new(10.0, 20.0)
        ));
    }

    #[test]
    fn given_left_press_when_filtered_then_uses_tracked_cursor() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(
            mouse::Button::Left,
        ));

        let result =
            pointer_pressed(event, Status::Captured, window::Id::unique());

        assert!(matches!(result, Some(AppEvent::PointerPressed(None))));
    }

    #[test]
    fn given_right_press_when_filtered_then_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(
            mouse::Button::Right,
        ));

        let result =
            pointer_pressed(event, Status::Ignored, window::Id::unique());

        assert!(result.is_none());
    }

    #[test]
    fn given_finger_press_when_filtered_then_carries_its_position() {
        let event = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(0),
            position: Point::new(5.0, 6.0),
        });

        let result =
            pointer_pressed(event, Status::Ignored, window::Id::unique());

        assert!(matches!(
            result,
            Some(AppEvent::PointerPressed(Some(position)))
                if position == Point::new(5.0, 6.0)
        ));
    }
}
