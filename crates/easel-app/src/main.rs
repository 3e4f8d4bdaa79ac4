//! Headless demonstration of the easel editing core.
//!
//! Builds a small drawing, rearranges its z-order with undo, and drives the
//! text tool through a scripted create-type-commit session.

use easel_core::{
    ActionKind, ArrangeAction, Drawing, DrawingError, DrawingView, EllipseFigure, Figure,
    Modifiers, MouseButton, OverlayKey, PointerEvent, RectangleFigure, TextFigure, TextTool,
    UndoHistory,
};
use kurbo::Point;

fn describe(figure: &Figure) -> String {
    match figure {
        Figure::Rectangle(_) => "rectangle".to_string(),
        Figure::Ellipse(_) => "ellipse".to_string(),
        Figure::Text(f) => format!("text({:?})", f.text()),
    }
}

fn print_order(label: &str, drawing: &Drawing) {
    let names: Vec<String> = drawing.figures().iter().map(describe).collect();
    println!("{label}: [{}]", names.join(", "));
}

fn press(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Down {
        position: Point::new(x, y),
        button: MouseButton::Left,
    }
}

fn main() -> Result<(), DrawingError> {
    env_logger::init();
    log::info!("starting easel demo");

    let mut drawing = Drawing::new();
    let mut view = DrawingView::new();
    let mut history = UndoHistory::new();

    let back = drawing.add(Figure::Rectangle(RectangleFigure::new(
        Point::new(20.0, 20.0),
        160.0,
        100.0,
    )))?;
    drawing.add(Figure::Ellipse(EllipseFigure::circle(
        Point::new(140.0, 90.0),
        60.0,
    )))?;
    drawing.add(Figure::Rectangle(RectangleFigure::new(
        Point::new(90.0, 60.0),
        120.0,
        80.0,
    )))?;
    print_order("initial", &drawing);

    // Bring the back rectangle to the front, dispatching the action from
    // a key chord the way a host window would; then undo and redo it.
    view.select(back);
    let actions = [
        ArrangeAction::new(ActionKind::BringToFront),
        ArrangeAction::new(ActionKind::SendToBack),
    ];
    let chord = Modifiers {
        ctrl: true,
        shift: true,
        ..Modifiers::default()
    };
    for action in &actions {
        if action.shortcut().matches("f", chord) && action.is_enabled(&view) {
            println!("applying {} ({})", action.label(), action.shortcut().format());
            action.perform(&mut drawing, &view, &mut history)?;
        }
    }
    print_order("after arrange", &drawing);

    history.undo(&mut drawing)?;
    print_order("after undo", &drawing);
    history.redo(&mut drawing)?;
    print_order("after redo", &drawing);

    // Create a text figure in place and type into it.
    let mut tool = TextTool::new(TextFigure::new(Point::ZERO, String::new()));
    tool.handle_pointer(&press(320.0, 60.0), &mut drawing, &mut view, &mut history)?;
    for c in "Hello, easel!".chars() {
        tool.handle_key(&OverlayKey::Character(c), &mut drawing, &mut view, &mut history)?;
    }
    tool.handle_key(&OverlayKey::Escape, &mut drawing, &mut view, &mut history)?;
    print_order("after text edit", &drawing);

    // A second press starts a session and abandons it empty: the figure
    // is discarded again.
    tool.handle_pointer(&press(320.0, 200.0), &mut drawing, &mut view, &mut history)?;
    tool.end_edit(&mut drawing, &mut view, &mut history)?;
    print_order("after abandoned edit", &drawing);

    history.undo(&mut drawing)?;
    print_order("after undoing the discard", &drawing);

    let events = drawing.drain_events();
    log::info!("drawing emitted {} change events", events.len());
    if let Some(label) = history.undo_label() {
        println!("next undo would revert: {label}");
    }

    Ok(())
}
