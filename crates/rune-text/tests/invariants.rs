use proptest::prelude::*;
use rune_text::{Direction, FixedAdvanceMeasurer, LineLayout, Point, SectionStore, TextView};

#[derive(Debug, Clone)]
enum Edit {
    Append(String),
    Replace(usize, String),
    InsertBefore(usize, String),
}

fn edit() -> impl Strategy<Value = Edit> {
    let text = "[a-z \n]{0,50}";
    prop_oneof![
        text.prop_map(Edit::Append),
        (any::<usize>(), text).prop_map(|(at, t)| Edit::Replace(at, t)),
        (any::<usize>(), text).prop_map(|(at, t)| Edit::InsertBefore(at, t)),
    ]
}

fn apply(view: &mut TextView, edit: Edit) {
    let ids: Vec<_> = view.sections().iter().map(|s| s.id()).collect();
    match edit {
        Edit::Append(text) => {
            view.append(text, Direction::Ltr);
        }
        Edit::Replace(at, text) if !ids.is_empty() => {
            view.replace(ids[at % ids.len()], text).unwrap();
        }
        Edit::InsertBefore(at, text) if !ids.is_empty() => {
            view.insert_before(ids[at % ids.len()], text, Direction::Ltr).unwrap();
        }
        Edit::Replace(_, text) | Edit::InsertBefore(_, text) => {
            view.append(text, Direction::Ltr);
        }
    }
}

fn wrap(texts: &[String], page_width: f32) -> LineLayout {
    let mut store = SectionStore::new();
    for text in texts {
        store.append(text.as_str(), Direction::Ltr);
    }
    let mut measurer = FixedAdvanceMeasurer::new(6.0, 14.0);
    LineLayout::wrap(store.sections(), page_width, &mut measurer)
}

fn hebrew(len: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(0u32..27, len).prop_map(|codes| {
        codes
            .into_iter()
            .filter_map(|c| char::from_u32(0x05D0 + c))
            .collect()
    })
}

proptest! {
    #[test]
    fn lines_are_contiguous_and_stacked(
        texts in prop::collection::vec("[a-z ]{0,60}", 1..6),
        page_width in 12.0f32..200.0,
    ) {
        let layout = wrap(&texts, page_width);

        prop_assert!(layout.line_count() >= texts.len());
        let mut y = 0.0f32;
        for (i, line) in layout.lines().iter().enumerate() {
            prop_assert_eq!(line.line_number, i);
            prop_assert_eq!(line.y_offset, y);
            y += line.height;
        }
        prop_assert_eq!(layout.minimum_size_y_required(), y);

        let total: usize = texts.iter().map(|t| t.chars().count()).sum();
        prop_assert_eq!(layout.char_count(), total);
    }

    #[test]
    fn edits_keep_lines_renumbered_and_stacked(
        edits in prop::collection::vec(edit(), 1..12),
        page_width in 12.0f32..200.0,
    ) {
        let mut view = TextView::new(FixedAdvanceMeasurer::new(6.0, 14.0), page_width);
        for e in edits {
            apply(&mut view, e);

            let layout = view.layout();
            let mut y = 0.0f32;
            for (i, line) in layout.lines().iter().enumerate() {
                prop_assert_eq!(line.line_number, i);
                prop_assert_eq!(line.y_offset, y);
                y += line.height;
            }
            prop_assert_eq!(view.minimum_size_y_required(), y);

            // Lines follow store order, section by section.
            let mut next = 0usize;
            for section in view.sections() {
                let range = layout.lines_of_section(section.id());
                prop_assert_eq!(range.start, next);
                prop_assert!(!range.is_empty());
                next = range.end;
            }
            prop_assert_eq!(next, layout.line_count());
        }
    }

    #[test]
    fn selection_ignores_endpoint_order(
        texts in prop::collection::vec("[a-z \n]{1,60}", 1..4),
        a in (0.0f32..130.0, 0.0f32..200.0),
        b in (0.0f32..130.0, 0.0f32..200.0),
    ) {
        let layout = wrap(&texts, 64.0);
        let p = layout.resolve(Point::new(a.0, a.1)).unwrap();
        let q = layout.resolve(Point::new(b.0, b.1)).unwrap();

        let forward = layout.selection_of(p, q).unwrap();
        let backward = layout.selection_of(q, p).unwrap();
        prop_assert_eq!(&forward, &backward);

        let lower = forward.lower().character_at;
        let upper = forward.upper().character_at;
        prop_assert!(lower <= upper);
        prop_assert_eq!(
            forward.regions().len(),
            upper.line_number - lower.line_number + 1
        );
        for (offset, region) in forward.regions().iter().enumerate() {
            prop_assert_eq!(region.line_number, lower.line_number + offset);
            prop_assert!(region.width > 0.0);
        }
    }

    #[test]
    fn rtl_lines_run_right_to_left(text in hebrew(2..20)) {
        let mut store = SectionStore::new();
        store.append(text.as_str(), Direction::Rtl);
        let mut measurer = FixedAdvanceMeasurer::new(6.0, 14.0);
        let layout = LineLayout::wrap(store.sections(), 128.0, &mut measurer);
        let line = &layout.lines()[0];

        prop_assert_eq!(line.right(), 128.0);
        let first = line.char_bounds(0).unwrap();
        let second = line.char_bounds(1).unwrap();
        prop_assert!(second.1 <= first.0);

        let rightmost = layout.resolve(Point::new(line.right() - 1.0, 1.0)).unwrap();
        let leftmost = layout.resolve(Point::new(line.left() + 1.0, 1.0)).unwrap();
        prop_assert_eq!(rightmost.index, 0);
        prop_assert_eq!(leftmost.index, line.char_count() - 1);
    }
}
