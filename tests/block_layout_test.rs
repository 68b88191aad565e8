use blockstack::{
    Alignment, BlockLayout, ElementAlignment, Bounds, ContainerLayout, Constraints, Element, ElementId, ElementStore,
    Insets, IVec2, LayoutHost,
};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn insert_all(store: &mut ElementStore, sizes: &[(i32, i32)]) -> Vec<ElementId> {
    sizes
        .iter()
        .map(|&(w, h)| store.insert(Element::new("block", IVec2::new(w, h))))
        .collect()
}

const SIZES: [(i32, i32); 4] = [(100, 20), (60, 30), (240, 12), (8, 50)];

#[test]
fn test_preferred_height_is_sum_without_spacing() {
    init_logging();
    let mut store = ElementStore::new();
    let ids = insert_all(&mut store, &SIZES);

    let mut layout = BlockLayout::new();
    for id in &ids {
        layout.add(*id, None);
    }

    let size = layout.preferred_size(&store, Insets::ZERO);
    let total: i32 = SIZES.iter().map(|(_, h)| h).sum();
    assert_eq!(size.y, total);
    assert_eq!(size.x, 240);
}

#[test]
fn test_preferred_height_counts_gaps_between_elements() {
    let mut store = ElementStore::new();
    let ids = insert_all(&mut store, &SIZES);

    let gap = 6;
    let padding = 9;
    let mut layout = BlockLayout::with_padding(Alignment::Left, gap, padding);
    for id in &ids {
        layout.add(*id, None);
    }

    let total: i32 = SIZES.iter().map(|(_, h)| h).sum();
    let n = SIZES.len() as i32;
    let size = layout.preferred_size(&store, Insets::ZERO);
    assert_eq!(size.y, total + (n - 1) * gap + 2 * padding);
    assert_eq!(size.x, 240 + 2 * padding);

    let empty = BlockLayout::with_padding(Alignment::Left, gap, padding);
    assert_eq!(empty.preferred_size(&store, Insets::ZERO), IVec2::ZERO);
}

#[test]
fn test_alignment_rules_hold_for_every_element() {
    let mut store = ElementStore::new();
    let ids = insert_all(&mut store, &SIZES);
    let container = IVec2::new(400, 600);
    let insets = Insets::new(2, 3, 4, 5);
    let padding = 7;
    let left = insets.left + padding;
    let right = container.x - insets.right - padding;

    for alignment in [Alignment::Left, Alignment::Right, Alignment::Justify] {
        let mut layout = BlockLayout::with_padding(alignment, 3, padding);
        for (i, id) in ids.iter().enumerate() {
            let margin = i as i32 * 2;
            layout.add(*id, Some(Constraints::with_margins(alignment, 1, margin + 1, 1, margin)));
        }

        let result = layout.layout(container, insets, &mut store);
        for (placement, entry) in result.placements.iter().zip(layout.entries()) {
            let c = entry.constraints;
            let natural = store.preferred_size(placement.element);
            let bounds = placement.bounds;
            match alignment {
                Alignment::Left => {
                    assert_eq!(bounds.x(), left + c.margin_left);
                    assert_eq!(bounds.width(), natural.x);
                }
                Alignment::Right => {
                    assert_eq!(bounds.right(), right - c.margin_right);
                    assert_eq!(bounds.width(), natural.x);
                }
                Alignment::Justify => {
                    assert_eq!(bounds.x(), left + c.margin_left);
                    assert_eq!(bounds.width(), (right - c.margin_right) - (left + c.margin_left));
                }
                Alignment::Center => unreachable!(),
            }
            assert_eq!(bounds.height(), natural.y);
        }
    }
}

#[test]
fn test_stacking_order_and_vertical_cursor() {
    let mut store = ElementStore::new();
    let ids = insert_all(&mut store, &SIZES);

    let mut layout = BlockLayout::with_padding(Alignment::Left, 4, 10);
    for id in &ids {
        layout.add(*id, Some(Constraints::with_margins(ElementAlignment::Inherit, 2, 0, 3, 0)));
    }

    let result = layout.layout(IVec2::new(300, 300), Insets::ZERO, &mut store);
    let tops: Vec<i32> = result.placements.iter().map(|p| p.bounds.y()).collect();
    // each step: top margin 2, height, bottom margin 3, gap 4
    assert_eq!(tops, vec![12, 12 + 20 + 9, 41 + 30 + 9, 80 + 12 + 9]);
    assert_eq!(result.cursor_end, 101 + 50 + 3 + 4);
}

#[test]
fn test_report_scenario() {
    let mut store = ElementStore::new();
    let a = store.insert(Element::new("headline", IVec2::new(100, 20)));
    let b = store.insert(Element::new("print", IVec2::new(60, 30)));

    let mut layout = BlockLayout::with_padding(Alignment::Center, 4, 10);
    layout.add(a, Some(Constraints::new(Alignment::Justify)));
    layout.add(b, Some(Constraints::new(Alignment::Right)));

    layout.layout(IVec2::new(300, 400), Insets::ZERO, &mut store);

    assert_eq!(store.bounds(a), Bounds::new(10, 10, 280, 20));
    assert_eq!(store.bounds(b), Bounds::new(230, 34, 60, 30));
}

#[test]
fn test_duplicate_add_then_remove() -> anyhow::Result<()> {
    let mut store = ElementStore::new();
    let ids = insert_all(&mut store, &[(50, 10), (70, 40)]);
    let (twice, other) = (ids[0], ids[1]);

    let mut layout = BlockLayout::with_gap(Alignment::Left, 5);
    layout.add(twice, None);
    layout.add(other, None);
    layout.add_dyn(twice, Some(&Constraints::new(Alignment::Right) as &dyn std::any::Any))?;
    assert_eq!(layout.len(), 3);

    assert_eq!(layout.remove(twice), 2);

    let result = layout.layout(IVec2::new(200, 200), Insets::ZERO, &mut store);
    assert_eq!(result.len(), 1);
    assert_eq!(result.bounds_of(twice), None);
    assert_eq!(result.bounds_of(other), Some(Bounds::new(0, 0, 70, 40)));
    assert_eq!(layout.preferred_size(&store, Insets::ZERO), IVec2::new(70, 40));
    Ok(())
}

#[test]
fn test_layout_is_idempotent() {
    let mut store = ElementStore::new();
    let ids = insert_all(&mut store, &SIZES);

    let mut layout = BlockLayout::with_sides(Alignment::Center, 3, 1, 2, 3, 4);
    let alignments = [Alignment::Center, Alignment::Left, Alignment::Right, Alignment::Justify];
    for (id, alignment) in ids.iter().zip(alignments) {
        layout.add(*id, Some(Constraints::with_margin(alignment, 5)));
    }

    let container = IVec2::new(333, 500);
    let insets = Insets::uniform(1);
    let first = layout.layout(container, insets, &mut store);
    let second = layout.layout(container, insets, &mut store);
    assert_eq!(first, second);
}

#[test]
fn test_layout_after_host_teardown_of_one_element() {
    let mut store = ElementStore::new();
    let ids = insert_all(&mut store, &[(10, 10), (20, 20)]);

    let mut layout = BlockLayout::with_alignment(Alignment::Left);
    layout.add(ids[0], None);
    layout.add(ids[1], None);

    // the host drops the element and then tells the layout
    store.remove(ids[0]);
    layout.remove(ids[0]);

    let result = layout.layout(IVec2::new(100, 100), Insets::ZERO, &mut store);
    assert_eq!(result.placements.len(), 1);
    assert_eq!(result.placements[0].bounds, Bounds::new(0, 0, 20, 20));
}

#[test]
fn test_unbounded_element_size_negotiation() {
    let mut store = ElementStore::new();
    let huge = store.insert(Element::new("huge", IVec2::new(i32::MAX, 10)));

    let mut layout = BlockLayout::with_padding(Alignment::Left, 0, 1);
    layout.add(huge, None);

    let preferred = layout.preferred_size(&store, Insets::ZERO);
    assert_eq!(preferred.y, 12);
    assert_eq!(layout.minimum_size(&store, Insets::uniform(1)), IVec2::new(2, 14));

    let result = layout.layout(IVec2::new(50, 50), Insets::ZERO, &mut store);
    assert_eq!(store.bounds(huge), Bounds::new(1, 1, i32::MAX, 10));
    assert_eq!(result.bounds_of(huge).map(|b| b.right()), Some(i32::MIN));
}
