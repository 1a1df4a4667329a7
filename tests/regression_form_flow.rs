use portfolio_page::Page;

fn contact_page() -> &'static str {
    r#"
    <section id='contact' style='height: 600px'>
      <form>
        <div class='form-group'><input id='email' type='email'></div>
        <div class='form-group'><textarea id='message'></textarea></div>
        <button type='submit'>Send Message</button>
      </form>
    </section>
    "#
}

#[test]
fn invalid_inputs_block_submission_silently() -> portfolio_page::Result<()> {
    let mut page = Page::from_html(contact_page())?;
    page.type_text("#email", "not-an-email")?;
    page.type_text("#message", "short")?;
    page.click("button[type=submit]")?;

    page.assert_has_class("#email", "error")?;
    page.assert_has_class("#message", "error")?;
    assert_eq!(page.count(".success-message")?, 0);
    assert!(page.pending_timers().is_empty());
    page.assert_text("button[type=submit]", "Send Message")?;
    Ok(())
}

#[test]
fn valid_submission_completes_and_the_notice_expires() -> portfolio_page::Result<()> {
    let mut page = Page::from_html(contact_page())?;
    page.type_text("#email", "me@example.com")?;
    page.type_text("#message", "Hello, this is long enough.")?;
    page.click("button[type=submit]")?;

    page.assert_text("button[type=submit]", "Sending...")?;
    assert!(page.disabled_of("button[type=submit]")?);

    page.advance_time(1500)?;
    page.assert_text(".success-message", "✓ Message sent successfully!")?;
    page.assert_text("button[type=submit]", "Send Message")?;
    assert!(!page.disabled_of("button[type=submit]")?);
    page.assert_value("#email", "")?;
    page.assert_value("#message", "")?;

    page.advance_time(5000)?;
    assert!(!page.exists(".success-message")?);
    Ok(())
}

#[test]
fn error_messages_never_accumulate_across_attempts() -> portfolio_page::Result<()> {
    let mut page = Page::from_html(contact_page())?;
    for attempt in ["bad", "also bad", "still@bad", "@worse"] {
        page.type_text("#email", attempt)?;
        page.blur("#email")?;
        assert_eq!(page.count(".error-message")?, 1);
    }
    Ok(())
}

#[test]
fn the_submit_control_is_locked_while_pending() -> portfolio_page::Result<()> {
    let mut page = Page::from_html(contact_page())?;
    page.type_text("#email", "me@example.com")?;
    page.type_text("#message", "Hello, this is long enough.")?;
    page.click("button[type=submit]")?;
    assert_eq!(page.pending_timers().len(), 1);

    page.click("button[type=submit]")?;
    page.submit("form")?;
    // The click is swallowed by the disabled control, and the direct submit
    // re-validates but refuses to start a second submission.
    assert_eq!(page.pending_timers().len(), 1);

    page.flush()?;
    page.assert_text("button[type=submit]", "Send Message")?;
    assert!(!page.disabled_of("button[type=submit]")?);
    Ok(())
}
