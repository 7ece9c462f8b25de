#![no_main]

use gridkit::ds::End;
use gridkit::grid::GridCore;
use gridkit::item::Item;
use gridkit::layout::{GridLayout, LayoutMetrics, TEMPLATE_CODE_0, TEMPLATE_CODE_1};
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary insert/snapshot/reinsert sequences on GridCore
//
// Tests random front/back inserts with colliding codes and labels to find
// violations of the size bound, uniqueness, positions or cache coherence.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    // First byte: max_count (0-40); second byte: column count (1-8)
    let max_count = (data[0] as usize) % 41;
    let columns = i32::from(data[1] % 8) + 1;
    let template = [
        Item::new(TEMPLATE_CODE_0, 10, 10).at(3, 0),
        Item::new(TEMPLATE_CODE_1, 10, 10).at(13, 0),
    ];
    let layout = match GridLayout::from_template(&template, LayoutMetrics::new(columns * 10, 2, 1)) {
        Ok(layout) => layout,
        Err(_) => return,
    };
    let mut grid = GridCore::new(layout, max_count);

    let mut idx = 2;
    while idx + 1 < data.len() {
        let op = data[idx] % 4;
        let code = i32::from(data[idx + 1] % 32);

        match op {
            0 => {
                grid.insert(Item::new(code, 10, 10), End::Front);
            }
            1 => {
                // label collisions exercise the full equivalence key
                let item = Item::new(code, 10, 10).with_label((data[idx + 1] % 3).to_string());
                grid.insert(item, End::Back);
            }
            2 => {
                let snapshot = grid.snapshot();
                assert_eq!(snapshot.len(), grid.len());
            }
            3 => {
                // reinserting the back member must move it to the front
                if let Some(back) = grid.iter().last().map(|m| m.shared_item().clone()) {
                    let len = grid.len();
                    grid.insert(back.clone(), End::Front);
                    assert_eq!(grid.len(), len);
                    assert!(grid.iter().next().is_some_and(|m| m.item().is_equivalent(&back)));
                }
            }
            _ => unreachable!(),
        }

        grid.debug_validate_invariants();
        assert!(grid.len() <= max_count);

        idx += 2;
    }
});
