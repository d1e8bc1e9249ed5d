use super::*;

#[test]
fn known_values_are_stable() {
    // h("a") = 97, h("ab") = 97 * 31 + 98 = 3105
    assert_eq!(polynomial_hash(""), 0);
    assert_eq!(polynomial_hash("a"), 97);
    assert_eq!(polynomial_hash("ab"), 3105);
    assert_eq!(hash_text("ab", 4), 3105 % 4);
}

#[test]
fn wraps_without_panicking_on_long_input() {
    let long = "Photosynthesis and the light-dependent reactions ".repeat(200);
    let a = hash_text(&long, 7);
    let b = hash_text(&long, 7);
    assert_eq!(a, b);
    assert!(a < 7);
}

#[test]
fn result_is_always_in_range() {
    for text in ["", "x", "Intro", "Key Ideas", "Option A vs B", "ÜNïcødé ✨"] {
        for m in 1..12 {
            assert!(hash_text(text, m) < m);
        }
    }
    assert_eq!(hash_text("anything", 0), 0);
}

#[test]
fn spread_shifts_by_scene_index() {
    let base = hash_text("Recap", 3);
    assert_eq!(spread_index("Recap", 0, 3), base);
    assert_eq!(spread_index("Recap", 1, 3), (base + 1) % 3);
    assert_eq!(spread_index("Recap", 2, 3), (base + 2) % 3);
    assert_eq!(spread_index("Recap", 9, 0), 0);
}

#[test]
fn pick_is_deterministic_and_handles_empty() {
    let items = ["🚀", "💡", "🎯"];
    assert_eq!(pick("Newton", &items), pick("Newton", &items));
    assert!(pick("Newton", &items).is_some());
    let empty: [&str; 0] = [];
    assert!(pick("Newton", &empty).is_none());
}

#[test]
fn key_concatenates() {
    assert_eq!(key("Intro", 3), "Intro3");
    assert_eq!(key("Intro", "bullets"), "Introbullets");
}
