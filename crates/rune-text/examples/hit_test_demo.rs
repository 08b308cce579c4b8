use rune_text::{Direction, FixedAdvanceMeasurer, HitTestPolicy, LineLayout, Point, SectionStore};

fn main() {
    println!("=== Hit Testing Demo ===\n");

    let mut store = SectionStore::new();
    store.append("HELLO!", Direction::Ltr);
    store.append("שלום עולם", Direction::Rtl);
    store.append("abc אבג", Direction::Ltr);

    let mut measurer = FixedAdvanceMeasurer::new(6.0, 14.0);
    let layout = LineLayout::wrap(store.sections(), 128.0, &mut measurer);

    for line in layout.lines() {
        println!(
            "Line {} ({:?}): {:?} x={}..{}",
            line.line_number,
            line.direction,
            line.text,
            line.left(),
            line.right()
        );
        for run in line.runs() {
            println!("  run {:?} {:?}", run.chars, run.direction);
        }
    }
    println!();

    let points = [
        Point::new(0.0, 5.0),
        Point::new(16.0, 5.0),
        Point::new(127.0, 20.0),
        Point::new(75.0, 20.0),
        Point::new(39.0, 35.0),
        Point::new(500.0, 500.0),
    ];
    for point in points {
        let clamped = layout.hit_test(point, HitTestPolicy::Clamp);
        let strict = layout.hit_test(point, HitTestPolicy::Strict);
        println!("({}, {}):", point.x, point.y);
        println!("  clamp:  {:?}", clamped);
        println!("  strict: {:?}", strict);
    }
}
