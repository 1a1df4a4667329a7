use super::*;

#[test]
fn nav_click_scrolls_target_section_to_viewport_top() -> Result<()> {
    let mut page = page()?;
    page.click("a[href='#projects']")?;
    assert_eq!(page.scroll_offset(), 680);

    page.click("a[href='#contact']")?;
    assert_eq!(page.scroll_offset(), 1280);
    Ok(())
}

#[test]
fn nav_click_highlights_the_matching_link() -> Result<()> {
    let mut page = page()?;
    page.click("a[href='#projects']")?;
    page.assert_has_class("a[href='#projects']", "active")?;
    page.assert_not_class("a[href='#about']", "active")?;
    page.assert_not_class("a[href='#contact']", "active")?;
    Ok(())
}

#[test]
fn last_matching_section_wins_the_highlight() -> Result<()> {
    let mut page = page()?;
    // 1100 is past contact's look-ahead threshold (1280 - 200), and past the
    // earlier sections' thresholds too; the last one in document order wins.
    page.scroll_to(1100)?;
    page.assert_has_class("a[href='#contact']", "active")?;
    assert_eq!(page.count(".menu a.active")?, 1);
    Ok(())
}

#[test]
fn exactly_one_link_is_active_after_each_scroll() -> Result<()> {
    let mut page = page()?;
    for offset in [100, 500, 900, 1300, 700, 200] {
        page.scroll_to(offset)?;
        assert_eq!(page.count(".menu a.active")?, 1);
    }
    Ok(())
}

#[test]
fn no_link_is_active_before_the_first_threshold() -> Result<()> {
    let html = r#"
    <nav class='navigation' style='height: 400px'>
      <ul class='menu'><li><a href='#first'>First</a></li></ul>
    </nav>
    <section id='first' style='height: 900px'></section>
    <section id='trailer' style='height: 900px'></section>
    "#;
    let mut page = Page::from_html(html)?;

    // #first starts at 400; its threshold is 400 - 200.
    page.scroll_to(100)?;
    page.assert_not_class("a[href='#first']", "active")?;

    page.scroll_to(250)?;
    page.assert_has_class("a[href='#first']", "active")?;
    Ok(())
}

#[test]
fn nav_click_closes_an_open_mobile_menu() -> Result<()> {
    let mut page = page()?;
    page.click(".menu-toggle")?;
    page.assert_has_class(".menu", "active")?;

    page.click("a[href='#about']")?;
    page.assert_not_class(".menu", "active")?;
    assert_eq!(page.scroll_offset(), 80);
    Ok(())
}

#[test]
fn nav_click_with_missing_target_is_ignored() -> Result<()> {
    let html = r#"
    <nav class='navigation' style='height: 80px'>
      <ul class='menu'><li><a href='#nowhere'>Broken</a></li></ul>
    </nav>
    <section id='real' style='height: 2000px'></section>
    "#;
    let mut page = Page::from_html(html)?;
    page.click("a[href='#nowhere']")?;
    assert_eq!(page.scroll_offset(), 0);
    Ok(())
}

#[test]
fn anchor_outside_the_menu_jumps_by_default() -> Result<()> {
    let html = r#"
    <a href='#target' style='height: 40px'>go</a>
    <section id='filler' style='height: 900px'></section>
    <section id='target' style='height: 900px'></section>
    "#;
    let mut page = Page::from_html(html)?;
    page.click("a[href='#target']")?;
    assert_eq!(page.scroll_offset(), 940);
    Ok(())
}
