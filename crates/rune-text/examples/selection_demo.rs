use rune_text::{Direction, FixedAdvanceMeasurer, Point, TextView};

fn main() {
    println!("=== Selection Demo ===\n");

    let mut view = TextView::new(FixedAdvanceMeasurer::new(6.0, 14.0), 128.0);
    let first = view.append("Hello line A.", Direction::Ltr);
    view.append("Hello line B.", Direction::Ltr);
    view.append("Hello line C.", Direction::Ltr);

    // Test 1: Forward drag across three lines
    println!("Test 1: Forward Drag");
    println!("--------------------");
    view.selection_start(Point::new(20.0, 7.0));
    view.selection_continue(Point::new(40.0, 20.0));
    if let Some(sel) = view.selection_finish(Point::new(40.0, 35.0)) {
        println!("Lower: {:?}", sel.lower().character_at);
        println!("Upper: {:?}", sel.upper().character_at);
        for region in sel.regions() {
            println!(
                "  line {}: x={}..{} y={}..{}",
                region.line_number,
                region.min_x(),
                region.max_x(),
                region.min_y(),
                region.max_y()
            );
        }
    }
    println!("Selected text: {:?}\n", view.selected_text());

    // Test 2: Backward drag gives the same selection
    println!("Test 2: Backward Drag");
    println!("---------------------");
    view.selection_start(Point::new(40.0, 35.0));
    if let Some(sel) = view.selection_finish(Point::new(20.0, 7.0)) {
        println!("Lower: {:?}", sel.lower().character_at);
        println!("Upper: {:?}", sel.upper().character_at);
    }
    println!("Selected text: {:?}\n", view.selected_text());

    // Test 3: Word selection
    println!("Test 3: Word Selection");
    println!("----------------------");
    view.select_word_at(Point::new(40.0, 20.0));
    println!("Word under (40, 20): {:?}\n", view.selected_text());

    // Test 4: Editing re-wraps and drops the selection
    println!("Test 4: Edit");
    println!("------------");
    view.replace(
        first,
        "This first section has been replaced by a much longer sentence that wraps into five lines.",
    )
    .expect("section exists");
    println!("Lines after edit: {}", view.line_count());
    println!("Selection after edit: {:?}", view.selection().is_some());
    for line in view.layout().lines() {
        println!("  {:>2} {:?}", line.line_number, line.text);
    }
}
