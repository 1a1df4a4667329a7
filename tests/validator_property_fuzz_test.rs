use portfolio_page::{validate_email, validate_message, Page};
use proptest::prelude::*;

const CONTACT_FORM: &str = r#"
    <form>
      <div class='form-group'><input id='email' type='email'></div>
      <div class='form-group'><textarea id='message'></textarea></div>
      <button type='submit'>Send Message</button>
    </form>
"#;

proptest! {
    #[test]
    fn email_without_an_at_sign_is_rejected(value in "[a-zA-Z0-9 .]{0,30}") {
        prop_assert!(validate_email(&value).is_err());
    }

    #[test]
    fn email_without_a_dot_after_the_at_is_rejected(
        local in "[a-z0-9]{1,10}",
        domain in "[a-z0-9]{1,10}",
    ) {
        let address = format!("{}@{}", local, domain);
        prop_assert!(validate_email(&address).is_err());
    }

    #[test]
    fn well_formed_addresses_are_accepted(
        local in "[a-z0-9._%+-]{1,10}",
        domain in "[a-z0-9-]{1,10}",
        tld in "[a-z]{2,6}",
    ) {
        let address = format!("{}@{}.{}", local, domain, tld);
        prop_assert!(validate_email(&address).is_ok());
    }

    #[test]
    fn short_ascii_messages_are_rejected(value in "[ a-zA-Z0-9]{0,9}") {
        prop_assert!(validate_message(&value).is_err());
    }

    #[test]
    fn long_ascii_messages_are_accepted(value in "[a-z]{10,40}") {
        prop_assert!(validate_message(&value).is_ok());
    }

    #[test]
    fn field_feedback_never_accumulates(
        values in prop::collection::vec("[a-zA-Z0-9@. ]{0,24}", 1..8),
    ) {
        let mut page = Page::from_html(CONTACT_FORM).unwrap();
        for value in &values {
            page.type_text("#email", value).unwrap();
            page.blur("#email").unwrap();
            prop_assert!(page.count(".error-message").unwrap() <= 1);
        }
    }
}
