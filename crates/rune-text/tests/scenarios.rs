use anyhow::{Context, Result};
use rune_text::{Direction, FixedAdvanceMeasurer, Point, TextView};

const PAGE_WIDTH: f32 = 128.0;
const LINE_HEIGHT: f32 = 14.0;

fn view() -> TextView {
    TextView::new(FixedAdvanceMeasurer::new(6.0, LINE_HEIGHT), PAGE_WIDTH)
}

fn three_sections(v: &mut TextView) -> Vec<rune_text::SectionId> {
    ["Hello line A.", "Hello line B.", "Hello line C."]
        .into_iter()
        .map(|text| v.append(text, Direction::Ltr))
        .collect()
}

#[test]
fn three_sections_wrap_to_three_lines() {
    let mut v = view();
    three_sections(&mut v);

    assert_eq!(v.line_count(), 3);
    let texts: Vec<&str> = v.layout().lines().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["Hello line A.", "Hello line B.", "Hello line C."]);
    assert_eq!(v.minimum_size_y_required(), 42.0);
}

#[test]
fn replacing_first_section_renumbers_everything() -> Result<()> {
    let mut v = view();
    let ids = three_sections(&mut v);

    v.replace(
        ids[0],
        "This first section has been replaced by a much longer sentence that wraps into five lines.",
    )?;

    assert_eq!(v.line_count(), 7);
    let numbers: Vec<usize> = v.layout().lines().iter().map(|l| l.line_number).collect();
    assert_eq!(numbers, (0..7).collect::<Vec<_>>());
    assert_eq!(v.layout().lines_of_section(ids[0]), 0..5);
    assert_eq!(v.layout().lines()[5].text, "Hello line B.");
    assert_eq!(v.layout().lines()[6].text, "Hello line C.");
    assert_eq!(v.minimum_size_y_required(), 7.0 * LINE_HEIGHT);
    Ok(())
}

#[test]
fn ltr_drag_selects_hel() -> Result<()> {
    let mut v = view();
    v.append("HELLO!", Direction::Ltr);

    v.selection_start(Point::new(0.0, 5.0)).context("press")?;
    v.selection_continue(Point::new(16.0, 5.0)).context("move")?;
    let sel = v.selection_finish(Point::new(16.0, 5.0)).context("release")?;

    assert_eq!(sel.lower().character_at.index, 0);
    assert_eq!(sel.lower().character_at.character, Some('H'));
    assert_eq!(sel.upper().character_at.index, 2);
    assert_eq!(sel.upper().character_at.character, Some('L'));
    assert_eq!(sel.regions().len(), 1);
    assert_eq!(sel.regions()[0].min_x(), 0.0);
    Ok(())
}

#[test]
fn rtl_right_to_left_drag_is_in_logical_order() -> Result<()> {
    let mut v = view();
    v.append("שלום עולם", Direction::Rtl);
    let line = &v.layout().lines()[0];
    let right_edge = line.right() - 1.0;
    let left_edge = line.left() + 1.0;

    v.selection_start(Point::new(right_edge, 5.0)).context("press")?;
    let sel = v
        .selection_finish(Point::new(left_edge, 5.0))
        .context("release")?
        .clone();

    assert_eq!(sel.lower().character_at.index, 0);
    assert_eq!(sel.upper().character_at.index, 8);
    assert!(sel.lower().character_at.index < sel.upper().character_at.index);
    // Whole line highlighted, one region.
    assert_eq!(sel.regions().len(), 1);
    assert_eq!(sel.regions()[0].min_x(), v.layout().lines()[0].left());
    assert_eq!(sel.regions()[0].max_x(), PAGE_WIDTH);
    assert_eq!(v.selected_text().as_deref(), Some("שלום עולם"));
    Ok(())
}

#[test]
fn three_line_drag_has_partial_full_partial_regions() -> Result<()> {
    let mut v = view();
    three_sections(&mut v);

    v.selection_start(Point::new(20.0, 7.0)).context("press")?;
    v.selection_continue(Point::new(40.0, 20.0)).context("move")?;
    let sel = v
        .selection_finish(Point::new(40.0, 35.0))
        .context("release")?
        .clone();

    let regions = sel.regions();
    assert_eq!(regions.len(), 3);
    let full = v.layout().lines()[1].width;
    assert!(regions[0].min_x() > 0.0);
    assert_eq!(regions[0].max_x(), v.layout().lines()[0].right());
    assert_eq!((regions[1].min_x(), regions[1].width), (0.0, full));
    assert_eq!(regions[2].min_x(), 0.0);
    assert!(regions[2].max_x() < v.layout().lines()[2].right());
    assert_eq!(
        regions.iter().map(|r| r.line_number).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    Ok(())
}

#[test]
fn backward_multi_line_drag_matches_forward() -> Result<()> {
    let mut v = view();
    three_sections(&mut v);

    v.selection_start(Point::new(20.0, 7.0)).context("press")?;
    let forward = v
        .selection_finish(Point::new(40.0, 35.0))
        .context("release")?
        .clone();

    v.selection_start(Point::new(40.0, 35.0)).context("press")?;
    let backward = v
        .selection_finish(Point::new(20.0, 7.0))
        .context("release")?
        .clone();

    assert_eq!(forward, backward);
    Ok(())
}

#[test]
fn move_before_press_is_not_consumed() {
    let mut v = view();
    three_sections(&mut v);
    assert!(v.selection_continue(Point::new(1.0, 1.0)).is_none());
    assert!(v.selection_finish(Point::new(1.0, 1.0)).is_none());
    assert!(v.selection().is_none());
}

#[test]
fn queries_before_layout_are_absent() {
    let mut v = view();
    assert!(v.position_at(Point::new(0.0, 0.0)).is_none());
    assert!(v.selection_start(Point::new(0.0, 0.0)).is_none());
    assert!(v.select_all().is_none());
}

#[test]
fn zero_width_page_keeps_sections_whole() {
    let mut v = view();
    three_sections(&mut v);
    v.set_page_width(0.0);
    assert_eq!(v.line_count(), 3);
    assert_eq!(v.layout().lines()[1].text, "Hello line B.");
    assert!(v.layout().lines().iter().all(|l| l.width == 0.0));
    let pos = v.position_at(Point::new(50.0, 20.0)).expect("resolves");
    assert_eq!((pos.line_number, pos.index), (1, 0));
}

#[test]
fn mixed_direction_line_highlights_one_region() -> Result<()> {
    let mut v = view();
    // Logical: a b c ' ' א ב ג ; visually the Hebrew run is reversed.
    v.append("abc אבג", Direction::Ltr);
    let layout = v.layout();
    let line = &layout.lines()[0];
    assert_eq!(line.char_bounds(4), Some((36.0, 42.0)));
    assert_eq!(line.char_bounds(6), Some((24.0, 30.0)));

    let from = layout.resolve(Point::new(13.0, 1.0)).context("resolve")?;
    let to = layout.resolve(Point::new(39.0, 1.0)).context("resolve")?;
    assert_eq!((from.index, to.index), (2, 4));
    let sel = layout.selection_of(from, to)?;
    assert_eq!(sel.regions().len(), 1);
    assert_eq!(sel.regions()[0].min_x(), 12.0);
    assert_eq!(sel.regions()[0].max_x(), 42.0);
    Ok(())
}

#[test]
fn page_narrower_than_a_glyph_keeps_sections_whole() {
    let mut v = TextView::new(FixedAdvanceMeasurer::new(6.0, LINE_HEIGHT), 3.0);
    three_sections(&mut v);
    assert_eq!(v.line_count(), 3);
    assert_eq!(v.layout().lines()[2].text, "Hello line C.");
    assert_eq!(v.minimum_size_y_required(), 42.0);
}

#[test]
fn wrapped_rtl_drag_has_one_region_per_line() -> Result<()> {
    let mut v = TextView::new(FixedAdvanceMeasurer::new(6.0, LINE_HEIGHT), 60.0);
    v.append("אבגד הוזח טיכל מנסע פצקר", Direction::Rtl);
    assert_eq!(v.line_count(), 3);
    assert_eq!(v.layout().lines()[2].text, "פצקר");

    // Logical index 2 of the first line sits at 42..48; index 1 of the
    // last line at 48..54.
    v.selection_start(Point::new(45.0, 7.0)).context("press")?;
    let sel = v
        .selection_finish(Point::new(51.0, 35.0))
        .context("release")?
        .clone();

    assert_eq!(sel.lower().character_at.index, 2);
    assert_eq!(sel.upper().character_at.index, 1);
    let regions = sel.regions();
    assert_eq!(regions.len(), 3);
    assert_eq!((regions[0].min_x(), regions[0].max_x()), (0.0, 48.0));
    assert_eq!((regions[1].min_x(), regions[1].max_x()), (0.0, 60.0));
    assert_eq!((regions[2].min_x(), regions[2].max_x()), (48.0, 60.0));
    Ok(())
}
