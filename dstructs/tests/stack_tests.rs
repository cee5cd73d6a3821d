use dstructs::Stack;

#[test]
fn test_stack_initialization() {
    let stack: Stack<'_, u32> = Stack::new();

    assert_eq!(stack.len(), 0);
    assert!(stack.is_empty());
    assert!(stack.top().is_none());
}

#[test]
fn test_stack_push_pop_operations() {
    let mut stack = Stack::new();

    stack.push(Box::new("first")).unwrap();
    stack.push(Box::new("second")).unwrap();
    stack.push(Box::new("third")).unwrap();
    assert_eq!(stack.len(), 3);
    assert!(!stack.is_empty());

    assert_eq!(stack.top(), Some(&"third"));
    assert_eq!(stack.pop().map(|elem| *elem), Some("third"));
    assert_eq!(stack.pop().map(|elem| *elem), Some("second"));
    assert_eq!(stack.top(), Some(&"first"));
    assert_eq!(stack.pop().map(|elem| *elem), Some("first"));

    assert!(stack.is_empty());
    assert!(stack.pop().is_none());
    assert!(stack.top().is_none());
}

#[test]
fn test_stack_snapshot_is_top_first() {
    let mut stack = Stack::new();
    for value in 1..=4u32 {
        stack.push(Box::new(value)).unwrap();
    }

    assert_eq!(stack.to_vec(), [&4, &3, &2, &1]);
    let collected: Vec<u32> = stack.iter().copied().collect();
    assert_eq!(collected, [4, 3, 2, 1]);
}

#[test]
fn test_stack_with_borrowed_elements() {
    let values = [10u32, 20];
    let mut stack = Stack::new();
    stack.push(&values[0]).unwrap();
    stack.push(&values[1]).unwrap();

    let top = stack.pop().unwrap();
    assert!(top.ptr_eq(&values[1]));
    assert!(!top.is_owned());
}

#[test]
fn test_stack_clear() {
    let mut stack = Stack::new();
    stack.push(Box::new(1u8)).unwrap();
    stack.push(Box::new(2u8)).unwrap();

    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);

    stack.push(Box::new(3u8)).unwrap();
    assert_eq!(stack.top(), Some(&3));
}

#[test]
fn test_stack_default() {
    let stack: Stack<'_, String> = Stack::default();
    assert!(stack.is_empty());
}
