use dstructs::Queue;

#[test]
fn test_queue_initialization() {
    let queue: Queue<'_, u32> = Queue::new();

    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());
    assert!(queue.head().is_none());
    assert!(queue.tail().is_none());
}

#[test]
fn test_queue_fifo_order() {
    let mut queue = Queue::new();
    for value in 1..=3u32 {
        queue.enqueue(Box::new(value)).unwrap();
    }

    assert_eq!(queue.head(), Some(&1));
    assert_eq!(queue.tail(), Some(&3));

    assert_eq!(queue.dequeue().map(|elem| *elem), Some(1));
    assert_eq!(queue.dequeue().map(|elem| *elem), Some(2));
    assert_eq!(queue.head(), Some(&3));
    assert_eq!(queue.tail(), Some(&3));
    assert_eq!(queue.dequeue().map(|elem| *elem), Some(3));

    assert!(queue.is_empty());
    assert!(queue.dequeue().is_none());
}

#[test]
fn test_queue_interleaved() {
    let mut queue = Queue::new();
    queue.enqueue(Box::new('a')).unwrap();
    queue.enqueue(Box::new('b')).unwrap();
    assert_eq!(queue.dequeue().map(|elem| *elem), Some('a'));
    queue.enqueue(Box::new('c')).unwrap();

    assert_eq!(queue.to_vec(), [&'b', &'c']);
    let collected: String = queue.iter().collect();
    assert_eq!(collected, "bc");
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_queue_clear() {
    let mut queue = Queue::new();
    queue.enqueue(Box::new(1u64)).unwrap();
    queue.clear();

    assert!(queue.is_empty());
    assert!(queue.tail().is_none());
}

#[test]
fn test_queue_default() {
    let queue: Queue<'_, u8> = Queue::default();
    assert!(queue.is_empty());
}
