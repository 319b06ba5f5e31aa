use super::*;
use std::cell::RefCell;

fn alice() -> RegistrationForm {
    let mut form = RegistrationForm::new();
    form.set_username("alice");
    form.set_email("a@b.com");
    form.set_password("secret");
    form
}

// =============================================================================
// field bindings
// =============================================================================

#[test]
fn set_field_writes_each_control_into_its_own_field() {
    let mut form = RegistrationForm::new();
    set_field(&mut form, Field::Username, "alice".to_owned());
    set_field(&mut form, Field::Email, "a@b.com".to_owned());
    set_field(&mut form, Field::Password, "secret".to_owned());

    assert_eq!(form, alice());
}

#[test]
fn set_field_stores_value_verbatim() {
    for field in Field::ALL {
        let mut form = RegistrationForm::new();
        set_field(&mut form, field, "  Mixed Case\t".to_owned());
        assert_eq!(field.read(&form), "  Mixed Case\t", "{field:?}");
    }
}

#[test]
fn set_field_leaves_other_fields_untouched() {
    for field in Field::ALL {
        let mut form = alice();
        set_field(&mut form, field, "changed".to_owned());
        for other in Field::ALL.into_iter().filter(|f| *f != field) {
            assert_eq!(other.read(&form), other.read(&alice()), "{field:?} touched {other:?}");
        }
    }
}

#[test]
fn set_field_keeps_last_value() {
    let mut form = RegistrationForm::new();
    for typed in ["s", "se", "sec", ""] {
        set_field(&mut form, Field::Password, typed.to_owned());
    }
    assert_eq!(form.password(), "");
}

#[test]
fn input_types_match_controls() {
    assert_eq!(Field::Username.input_type(), "text");
    assert_eq!(Field::Email.input_type(), "email");
    assert_eq!(Field::Password.input_type(), "password");
}

#[test]
fn fields_render_in_form_order() {
    let labels: Vec<_> = Field::ALL.into_iter().map(Field::label).collect();
    assert_eq!(labels, ["Username", "Email", "Password"]);
}

// =============================================================================
// submit handler
// =============================================================================

#[test]
fn handle_submit_prevents_default_before_spawning() {
    let steps = RefCell::new(Vec::new());
    handle_submit(|| steps.borrow_mut().push("prevent"), &alice(), |_| steps.borrow_mut().push("spawn"));
    assert_eq!(steps.into_inner(), ["prevent", "spawn"]);
}

#[test]
fn handle_submit_prevents_default_for_empty_form() {
    let prevented = RefCell::new(false);
    handle_submit(|| *prevented.borrow_mut() = true, &RegistrationForm::new(), |_| {});
    assert!(prevented.into_inner());
}

#[test]
fn handle_submit_prevents_and_spawns_on_every_call() {
    let prevented = RefCell::new(0);
    let spawned = RefCell::new(0);
    let form = alice();
    for _ in 0..3 {
        handle_submit(|| *prevented.borrow_mut() += 1, &form, |_| *spawned.borrow_mut() += 1);
    }
    assert_eq!(prevented.into_inner(), 3);
    assert_eq!(spawned.into_inner(), 3);
}

#[test]
fn handle_submit_spawns_snapshot_and_leaves_form_unchanged() {
    let form = alice();
    let spawned = RefCell::new(None);
    handle_submit(|| {}, &form, |snapshot| *spawned.borrow_mut() = Some(snapshot));

    assert_eq!(spawned.into_inner(), Some(alice()));
    assert_eq!(form, alice());
}
