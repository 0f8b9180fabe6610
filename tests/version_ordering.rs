//! Behaviour-driven tests covering version ordering and latest-entry selection.

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;

mod support;

use maven_home::search::{select_latest, select_latest_with_prefix};
use maven_home::version::compare_versions;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use support::steps::StepText;

#[derive(Default)]
struct OrderingWorld {
    comparison: Cell<Option<Ordering>>,
    listing: RefCell<Vec<String>>,
    selected: RefCell<Option<String>>,
}

#[fixture]
fn world() -> OrderingWorld {
    OrderingWorld::default()
}

fn comparison(world: &OrderingWorld) -> Ordering {
    world
        .comparison
        .get()
        .unwrap_or_else(|| panic!("the versions should have been compared"))
}

#[when("{left} is compared with {right}")]
fn compare(world: &OrderingWorld, left: StepText, right: StepText) {
    let ordering = compare_versions(&left.into_inner(), &right.into_inner());
    world.comparison.set(Some(ordering));
}

#[given("the listing {names}")]
fn set_listing(world: &OrderingWorld, names: StepText) {
    let entries = names
        .into_inner()
        .split(',')
        .map(str::to_owned)
        .collect();
    world.listing.replace(entries);
}

#[when("the latest entry is selected")]
fn select(world: &OrderingWorld) {
    let listing = world.listing.borrow();
    let latest = select_latest(listing.iter().map(String::as_str)).map(str::to_owned);
    world.selected.replace(latest);
}

#[when("the latest entry with prefix {prefix} is selected")]
fn select_with_prefix(world: &OrderingWorld, prefix: StepText) {
    let listing = world.listing.borrow();
    let latest = select_latest_with_prefix(listing.iter().map(String::as_str), &prefix.into_inner())
        .map(str::to_owned);
    world.selected.replace(latest);
}

#[then("the first version is newer")]
fn assert_newer(world: &OrderingWorld) {
    assert_eq!(comparison(world), Ordering::Greater);
}

#[then("the versions are equal")]
fn assert_equal(world: &OrderingWorld) {
    assert_eq!(comparison(world), Ordering::Equal);
}

#[then("the selected entry is {name}")]
fn assert_selected(world: &OrderingWorld, name: StepText) {
    assert_eq!(world.selected.borrow().as_deref(), Some(name.into_inner().as_str()));
}

#[scenario("tests/features/version_ordering.feature", index = 0)]
fn scenario_numeric_tokens(world: OrderingWorld) {
    let _ = world;
}

#[scenario("tests/features/version_ordering.feature", index = 1)]
fn scenario_zero_tail(world: OrderingWorld) {
    let _ = world;
}

#[scenario("tests/features/version_ordering.feature", index = 2)]
fn scenario_qualifier(world: OrderingWorld) {
    let _ = world;
}

#[scenario("tests/features/version_ordering.feature", index = 3)]
fn scenario_latest_keg(world: OrderingWorld) {
    let _ = world;
}

#[scenario("tests/features/version_ordering.feature", index = 4)]
fn scenario_prefixed_listing(world: OrderingWorld) {
    let _ = world;
}
