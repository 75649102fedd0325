use super::Scroll;

fn scroll(list_length: u16, viewport_length: u16) -> Scroll {
    let mut scroll = Scroll::default();
    scroll.set_state(list_length, viewport_length);
    return scroll;
}

#[test]
fn it_scrolls_down_until_the_end() {
    let mut scroll = scroll(12, 10);
    scroll.down();
    scroll.down();
    scroll.down();
    assert_eq!(scroll.position, 2);
}

#[test]
fn it_does_not_scroll_short_lists() {
    let mut scroll = scroll(5, 10);
    scroll.down_page();
    assert_eq!(scroll.position, 0);
    scroll.last();
    assert_eq!(scroll.position, 0);
}

#[test]
fn it_scrolls_up_until_the_top() {
    let mut scroll = scroll(40, 10);
    scroll.last();
    assert_eq!(scroll.position, 30);
    scroll.up_page();
    assert_eq!(scroll.position, 20);
    scroll.up_page();
    scroll.up_page();
    scroll.up_page();
    assert_eq!(scroll.position, 0);
}

#[test]
fn it_clamps_when_the_list_shrinks() {
    let mut scroll = scroll(40, 10);
    scroll.last();
    scroll.set_state(4, 10);
    assert_eq!(scroll.position, 0);
}
