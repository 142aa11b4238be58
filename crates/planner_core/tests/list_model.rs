use planner_core::{InsertOutcome, Item, MoveOutcome, ShoppingList};

fn grocery_list() -> ShoppingList {
    ShoppingList::new(
        vec![
            "Produce".to_string(),
            "Dairy & Eggs".to_string(),
            "Pantry".to_string(),
        ],
        "Other",
    )
}

#[test]
fn fallback_key_is_appended_when_missing() {
    let list = grocery_list();
    assert_eq!(
        list.categories(),
        ["Produce", "Dairy & Eggs", "Pantry", "Other"]
    );
}

#[test]
fn insert_rejects_duplicate_names_within_a_category() {
    let mut list = grocery_list();
    assert!(matches!(
        list.insert(Item::new("milk", "Dairy & Eggs")),
        InsertOutcome::Inserted { .. }
    ));
    assert_eq!(
        list.insert(Item::new("milk", "Dairy & Eggs")),
        InsertOutcome::Duplicate {
            category: "Dairy & Eggs".to_string()
        }
    );
    assert_eq!(list.items_in("Dairy & Eggs").len(), 1);
}

#[test]
fn same_name_is_allowed_in_different_categories() {
    let mut list = grocery_list();
    list.insert(Item::new("milk", "Dairy & Eggs"));
    assert!(matches!(
        list.insert(Item::new("milk", "Pantry")),
        InsertOutcome::Inserted { .. }
    ));
}

#[test]
fn unknown_category_coerces_to_fallback() {
    let mut list = grocery_list();
    let outcome = list.insert(Item::new("mystery jar", "Imported"));
    assert_eq!(
        outcome,
        InsertOutcome::Inserted {
            category: "Other".to_string(),
            coerced: true
        }
    );
    assert_eq!(list.items_in("Other")[0].name, "mystery jar");
    assert!(list.items_in("Imported").is_empty());
}

#[test]
fn move_appends_to_destination_sequence() {
    let mut list = grocery_list();
    list.insert(Item::new("oats", "Produce"));
    list.insert(Item::new("rice", "Pantry"));

    assert_eq!(list.move_item("oats", "Produce", "Pantry"), MoveOutcome::Moved);
    let names: Vec<&str> = list
        .items_in("Pantry")
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names, ["rice", "oats"]);
    assert!(list.items_in("Produce").is_empty());
    assert_eq!(list.items_in("Pantry")[1].category, "Pantry");
}

#[test]
fn move_to_same_category_is_a_noop() {
    let mut list = grocery_list();
    list.insert(Item::new("rice", "Pantry"));
    assert_eq!(
        list.move_item("rice", "Pantry", "Pantry"),
        MoveOutcome::SameCategory
    );
    assert_eq!(list.items_in("Pantry").len(), 1);
}

#[test]
fn move_reports_missing_items_and_name_collisions() {
    let mut list = grocery_list();
    list.insert(Item::new("milk", "Dairy & Eggs"));
    list.insert(Item::new("milk", "Pantry"));

    assert_eq!(
        list.move_item("butter", "Dairy & Eggs", "Pantry"),
        MoveOutcome::NotFound
    );
    assert_eq!(
        list.move_item("milk", "Dairy & Eggs", "Pantry"),
        MoveOutcome::Duplicate
    );
    // Collision leaves the source untouched.
    assert_eq!(list.items_in("Dairy & Eggs").len(), 1);
}

#[test]
fn clear_all_empties_sequences_but_keeps_keys() {
    let mut list = grocery_list();
    list.insert(Item::new("milk", "Dairy & Eggs"));
    list.insert(Item::new("rice", "Pantry"));

    list.clear_all();

    assert!(list.is_empty());
    assert_eq!(
        list.categories(),
        ["Produce", "Dairy & Eggs", "Pantry", "Other"]
    );
}

#[test]
fn snapshot_lists_every_category_in_configured_order() {
    let mut list = grocery_list();
    list.insert(Item::new("rice", "Pantry"));

    let snapshot = list.snapshot();
    let categories: Vec<&str> = snapshot
        .iter()
        .map(|(category, _)| category.as_str())
        .collect();
    assert_eq!(categories, ["Produce", "Dairy & Eggs", "Pantry", "Other"]);
    assert!(snapshot[0].1.is_empty());
    assert_eq!(snapshot[2].1[0].name, "rice");
}
