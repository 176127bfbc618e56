//! Applies queued list events to the model and feeds the view.

use std::time::Instant;

use crossbeam_channel::Receiver;
use list_core::{ListModel, Renderer};
use shared::protocol::ListEvent;

use crate::ui::list_view::ListView;

/// Drains every queued event in arrival order. Returns how many changed the list.
pub fn apply_queued_events(
    event_rx: &Receiver<ListEvent>,
    model: &mut ListModel,
    view: &mut ListView,
    now: Instant,
) -> usize {
    let mut applied = 0;
    while let Ok(event) = event_rx.try_recv() {
        let update = model.dispatch(event);
        if !update.changed {
            tracing::debug!(%event, "ignored event with no effect");
            continue;
        }

        match event {
            ListEvent::RowTapped(number) if update.reordered => view.highlight(number, now),
            ListEvent::ShuffleRequested => view.clear_highlight(),
            ListEvent::RowTapped(_) => {}
        }
        view.render(&update.rows, update.reordered);
        applied += 1;
    }
    applied
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crossbeam_channel::bounded;
    use shared::domain::RowNumber;

    fn view_for(model: &ListModel) -> ListView {
        let mut view = ListView::new(Duration::from_millis(600));
        model.render_into(&mut view);
        view
    }

    #[test]
    fn tap_highlights_row_moved_to_top() {
        let mut model = ListModel::with_seed(1);
        let mut view = view_for(&model);
        let (tx, rx) = bounded(8);
        let now = Instant::now();

        tx.send(ListEvent::RowTapped(RowNumber(9))).expect("send");
        assert_eq!(apply_queued_events(&rx, &mut model, &mut view, now), 1);

        assert_eq!(view.rows()[0].number, RowNumber(9));
        assert!(view.take_scroll_to_top());
        assert!(!view.take_scroll_to_top());
        assert!(view.highlight_strength(RowNumber(9), now) > 0.99);
        assert_eq!(view.highlight_strength(RowNumber(1), now), 0.0);
    }

    #[test]
    fn uncheck_and_unknown_rows_do_not_highlight() {
        let mut model = ListModel::with_seed(2);
        let mut view = view_for(&model);
        let (tx, rx) = bounded(8);
        let now = Instant::now();

        tx.send(ListEvent::RowTapped(RowNumber(3))).expect("send");
        tx.send(ListEvent::RowTapped(RowNumber(77))).expect("send");
        apply_queued_events(&rx, &mut model, &mut view, now);
        view.clear_highlight();
        let _ = view.take_scroll_to_top();

        tx.send(ListEvent::RowTapped(RowNumber(3))).expect("send");
        assert_eq!(apply_queued_events(&rx, &mut model, &mut view, now), 1);
        assert_eq!(view.highlight_strength(RowNumber(3), now), 0.0);
        assert!(!view.take_scroll_to_top());
        assert!(!view.rows()[0].checked);
    }

    #[test]
    fn shuffle_clears_highlight_and_scrolls() {
        let mut model = ListModel::with_seed(3);
        let mut view = view_for(&model);
        let (tx, rx) = bounded(8);
        let now = Instant::now();

        tx.send(ListEvent::RowTapped(RowNumber(20))).expect("send");
        tx.send(ListEvent::ShuffleRequested).expect("send");
        assert_eq!(apply_queued_events(&rx, &mut model, &mut view, now), 2);

        assert_eq!(view.highlight_strength(RowNumber(20), now), 0.0);
        assert!(view.take_scroll_to_top());
        assert_eq!(view.checked_count(), 1);
    }
}
