use super::*;

fn draft() -> CarDraft {
    CarDraft {
        make: " Toyota ".to_owned(),
        model: "Camry".to_owned(),
        year: "2022".to_owned(),
        color: "Blue".to_owned(),
        price: "25000".to_owned(),
        available: true,
    }
}

#[test]
fn validate_login_trims_username_and_requires_both() {
    assert_eq!(
        validate_login("  admin ", "admin123"),
        Ok(Credentials { username: "admin".to_owned(), password: "admin123".to_owned() })
    );
    assert_eq!(validate_login("   ", "x"), Err(FormError::MissingFields));
    assert_eq!(validate_login("admin", ""), Err(FormError::MissingFields));
}

#[test]
fn validate_registration_requires_matching_confirmation() {
    assert!(validate_registration("sam", "pw1", "pw1").is_ok());
    assert_eq!(validate_registration("sam", "pw1", "pw2"), Err(FormError::PasswordMismatch));
    assert_eq!(validate_registration("sam", "pw1", ""), Err(FormError::MissingFields));
    assert_eq!(validate_registration("", "pw1", "pw1"), Err(FormError::MissingFields));
}

#[test]
fn form_error_messages_match_notices() {
    assert_eq!(FormError::MissingFields.to_string(), "Please fill in all fields");
    assert_eq!(FormError::InvalidYear.to_string(), "Year must be a valid number between 1900 and 2100");
    assert_eq!(FormError::InvalidPrice.to_string(), "Price must be a positive number");
}

#[test]
fn car_draft_default_is_available() {
    let draft = CarDraft::default();
    assert!(draft.available);
    assert!(draft.make.is_empty());
}

#[test]
fn car_draft_validates_into_new_car() {
    let car = draft().validate().unwrap();
    assert_eq!(car.make, "Toyota");
    assert_eq!(car.year, 2022);
    assert!((car.price - 25000.0).abs() < f64::EPSILON);
    assert!(car.available);
}

#[test]
fn car_draft_requires_every_field() {
    let mut missing = draft();
    missing.color = "  ".to_owned();
    assert_eq!(missing.validate(), Err(FormError::MissingFields));
}

#[test]
fn car_draft_rejects_year_out_of_range() {
    for year in ["1899", "2101", "twenty", "2022.5"] {
        let mut d = draft();
        d.year = year.to_owned();
        assert_eq!(d.validate(), Err(FormError::InvalidYear), "year {year}");
    }
    let mut edge = draft();
    edge.year = "1900".to_owned();
    assert!(edge.validate().is_ok());
    edge.year = "2100".to_owned();
    assert!(edge.validate().is_ok());
}

#[test]
fn car_draft_rejects_non_positive_price() {
    for price in ["0", "-5", "cheap", "NaN", "inf"] {
        let mut d = draft();
        d.price = price.to_owned();
        assert_eq!(d.validate(), Err(FormError::InvalidPrice), "price {price}");
    }
}

#[test]
fn car_draft_from_car_prefills_text_fields() {
    let car = Car {
        id: 9,
        make: "BMW".to_owned(),
        model: "X5".to_owned(),
        year: 2022,
        color: "Silver".to_owned(),
        price: 60000.0,
        available: false,
    };
    let draft = CarDraft::from_car(&car);
    assert_eq!(draft.year, "2022");
    assert_eq!(draft.price, "60000");
    assert!(!draft.available);
    let round = draft.validate().unwrap();
    assert_eq!(round.model, "X5");
}
