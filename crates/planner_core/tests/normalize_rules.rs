use planner_core::normalize;

#[test]
fn lowercases_and_trims() {
    assert_eq!(normalize("  Whole Milk  "), "whole milk");
}

#[test]
fn strips_quantity_and_unit() {
    assert_eq!(normalize("2 large tomatoes (optional)"), "tomato");
    assert_eq!(normalize("500g minced beef"), "minced beef");
    assert_eq!(normalize("1/2 lb chicken"), "chicken");
}

#[test]
fn strips_leading_bullets() {
    assert_eq!(normalize("• olive oil"), "olive oil");
    assert_eq!(normalize("- 3 carrots"), "carrots");
    assert_eq!(normalize("▢ 1 onion"), "onion");
}

#[test]
fn removes_parenthetical_notes() {
    assert_eq!(normalize("butter (softened, at room temp)"), "butter");
}

#[test]
fn truncates_at_first_comma() {
    assert_eq!(normalize("  Tinned Tuna, drained"), "tinned tuna");
    assert_eq!(normalize("spring onions, sliced, for serving"), "spring onions");
}

#[test]
fn discards_non_ingredient_lines() {
    assert_eq!(normalize("sauce for dipping"), "");
    assert_eq!(normalize("Optional toppings"), "");
    assert_eq!(normalize("garnish with parsley"), "");
    assert_eq!(normalize("for the dressing"), "");
}

#[test]
fn empty_and_unusable_inputs_return_empty() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "");
    assert_eq!(normalize("2"), "");
    assert_eq!(normalize("(see note)"), "");
}

#[test]
fn strips_trailing_punctuation() {
    assert_eq!(normalize("plain flour:"), "plain flour");
    assert_eq!(normalize("sea salt."), "sea salt");
}

#[test]
fn applies_fixed_singularization() {
    assert_eq!(normalize("cherry tomatoes"), "cherry tomato");
    assert_eq!(normalize("3 cucumbers"), "cucumber");
    assert_eq!(normalize("2 garlic cloves"), "garlic clove");
}

#[test]
fn keeps_a_lone_ingredient_word_after_a_quantity() {
    // Only whitelisted unit and size tokens are consumed after the number;
    // an ingredient word in that slot stays.
    assert_eq!(normalize("3 carrots"), "carrots");
    assert_eq!(normalize("1 onion"), "onion");
    assert_eq!(normalize("6 eggs"), "eggs");
    assert_eq!(normalize("2 x milk"), "milk");
    assert_eq!(normalize("1 l milk"), "milk");
    assert_eq!(normalize("2 lemons"), "lemons");
}

#[test]
fn flattens_embedded_newlines() {
    assert_eq!(normalize("fresh\nbasil"), "fresh basil");
}

#[test]
fn is_idempotent() {
    let inputs = [
        "2 large tomatoes (optional)",
        "  Tinned Tuna, drained",
        "• 500ml double cream.",
        "- 3 carrots",
        "2 2 apples",
        "1/2 lb chicken",
        "sauce for dipping",
        "fresh\nbasil leaves",
        "▢ ▢ rice",
        "",
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
    }
}
