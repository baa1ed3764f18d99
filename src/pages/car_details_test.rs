use super::*;

fn car(available: bool) -> Car {
    Car {
        id: 7,
        make: "Toyota".to_owned(),
        model: "Corolla".to_owned(),
        year: 2022,
        color: "Blue".to_owned(),
        price: 25_000.0,
        available,
    }
}

#[test]
fn regular_user_can_reserve_available_car() {
    assert!(can_reserve(SessionState::signed_in(false), &car(true)));
}

#[test]
fn reserved_car_is_not_reservable_again() {
    assert!(!can_reserve(SessionState::signed_in(false), &car(false)));
}

#[test]
fn admins_and_guests_do_not_reserve() {
    assert!(!can_reserve(SessionState::signed_in(true), &car(true)));
    assert!(!can_reserve(SessionState::signed_out(), &car(true)));
    assert!(!can_reserve(SessionState::starting(), &car(true)));
}
