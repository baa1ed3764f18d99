use super::*;

fn car(id: i64, make: &str, model: &str, year: i32, color: &str, available: bool) -> Car {
    Car {
        id,
        make: make.to_owned(),
        model: model.to_owned(),
        year,
        color: color.to_owned(),
        price: 25_000.0,
        available,
    }
}

fn fleet() -> Vec<Car> {
    vec![
        car(1, "Toyota", "Camry", 2022, "Blue", true),
        car(2, "Honda", "Civic", 2023, "Red", false),
        car(3, "Ford", "Mustang", 2021, "Black", true),
        car(4, "Tesla", "Model 3", 2023, "White", true),
    ]
}

fn ids(cars: &[Car]) -> Vec<i64> {
    cars.iter().map(|c| c.id).collect()
}

#[test]
fn empty_search_keeps_everything() {
    assert_eq!(ids(&filter_cars(&fleet(), "  ", AvailabilityFilter::All)), vec![1, 2, 3, 4]);
}

#[test]
fn search_is_case_insensitive_across_text_fields() {
    assert_eq!(ids(&filter_cars(&fleet(), "toy", AvailabilityFilter::All)), vec![1]);
    assert_eq!(ids(&filter_cars(&fleet(), "MUSTANG", AvailabilityFilter::All)), vec![3]);
    assert_eq!(ids(&filter_cars(&fleet(), "red", AvailabilityFilter::All)), vec![2]);
}

#[test]
fn search_matches_year_substring() {
    assert_eq!(ids(&filter_cars(&fleet(), "2023", AvailabilityFilter::All)), vec![2, 4]);
    assert_eq!(ids(&filter_cars(&fleet(), "202", AvailabilityFilter::All)), vec![1, 2, 3, 4]);
}

#[test]
fn availability_filter_combines_with_search() {
    assert_eq!(ids(&filter_cars(&fleet(), "2023", AvailabilityFilter::Available)), vec![4]);
    assert_eq!(ids(&filter_cars(&fleet(), "", AvailabilityFilter::Unavailable)), vec![2]);
}

#[test]
fn filter_parses_select_values() {
    assert_eq!(AvailabilityFilter::from_value("available"), AvailabilityFilter::Available);
    assert_eq!(AvailabilityFilter::from_value("unavailable"), AvailabilityFilter::Unavailable);
    assert_eq!(AvailabilityFilter::from_value("all"), AvailabilityFilter::All);
    assert_eq!(AvailabilityFilter::from_value("bogus"), AvailabilityFilter::All);
    assert_eq!(AvailabilityFilter::Unavailable.value(), "unavailable");
}

#[test]
fn stats_count_availability() {
    assert_eq!(inventory_stats(&fleet()), InventoryStats { total: 4, available: 3, unavailable: 1 });
    assert_eq!(inventory_stats(&[]), InventoryStats::default());
}

#[test]
fn cars_state_visible_and_remove() {
    let mut state = CarsState { items: fleet(), search: "t".to_owned(), ..CarsState::default() };
    assert_eq!(ids(&state.visible()), vec![1, 3, 4]);
    state.remove(3);
    assert_eq!(ids(&state.visible()), vec![1, 4]);
    assert_eq!(state.stats().total, 3);
}
