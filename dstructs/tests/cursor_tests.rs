use dstructs::{DstructsError, LinkedList, Vector};

fn sample_vector() -> Vector<'static, u32> {
    let mut vector = Vector::new().unwrap();
    for value in 0..6u32 {
        vector.push_back(Box::new(value)).unwrap();
    }
    vector
}

fn sample_list() -> LinkedList<'static, u32> {
    let mut list = LinkedList::new();
    for value in 0..6u32 {
        list.push_back(Box::new(value)).unwrap();
    }
    list
}

#[test]
fn test_vector_cursor_forward_and_back() {
    let vector = sample_vector();
    let mut cursor = vector.cursor(2).unwrap();

    assert_eq!(cursor.position(), 2);
    assert!(cursor.has_next());
    assert!(cursor.has_prev());

    assert_eq!(cursor.next(), Some(&2));
    assert_eq!(cursor.next(), Some(&3));
    assert_eq!(cursor.position(), 4);
    assert_eq!(cursor.prev(), Some(&3));
    assert_eq!(cursor.prev(), Some(&2));
    assert_eq!(cursor.prev(), Some(&1));
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_list_cursor_forward_and_back() {
    let list = sample_list();
    let mut cursor = list.cursor(2).unwrap();

    assert_eq!(cursor.position(), 2);
    assert!(cursor.has_next());
    assert!(cursor.has_prev());

    assert_eq!(cursor.next(), Some(&2));
    assert_eq!(cursor.next(), Some(&3));
    assert_eq!(cursor.position(), 4);
    assert_eq!(cursor.prev(), Some(&3));
    assert_eq!(cursor.prev(), Some(&2));
    assert_eq!(cursor.prev(), Some(&1));
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_cursor_round_trip_symmetry() {
    let vector = sample_vector();
    let list = sample_list();

    for start in 0..=6 {
        for steps in 0..=(6 - start) {
            let mut vector_cursor = vector.cursor(start).unwrap();
            let mut list_cursor = list.cursor(start).unwrap();

            for _ in 0..steps {
                assert_eq!(vector_cursor.next(), list_cursor.next());
            }
            for _ in 0..steps {
                assert_eq!(vector_cursor.prev(), list_cursor.prev());
            }

            assert_eq!(vector_cursor.position(), start);
            assert_eq!(list_cursor.position(), start);
            assert_eq!(vector_cursor.next(), vector.get(start));
            assert_eq!(list_cursor.next(), list.get(start));
        }
    }
}

#[test]
fn test_cursor_at_front_boundary() {
    let vector = sample_vector();
    let list = sample_list();

    let mut vector_cursor = vector.cursor(0).unwrap();
    let mut list_cursor = list.cursor(0).unwrap();

    assert!(!vector_cursor.has_prev());
    assert!(!list_cursor.has_prev());
    assert_eq!(vector_cursor.prev(), None);
    assert_eq!(list_cursor.prev(), None);

    // A refused move leaves the cursor in place
    assert_eq!(vector_cursor.next(), Some(&0));
    assert_eq!(list_cursor.next(), Some(&0));
}

#[test]
fn test_cursor_at_back_boundary() {
    let vector = sample_vector();
    let list = sample_list();

    let mut vector_cursor = vector.cursor(6).unwrap();
    let mut list_cursor = list.cursor(6).unwrap();

    assert!(!vector_cursor.has_next());
    assert!(!list_cursor.has_next());
    assert_eq!(vector_cursor.next(), None);
    assert_eq!(list_cursor.next(), None);

    assert_eq!(vector_cursor.prev(), Some(&5));
    assert_eq!(list_cursor.prev(), Some(&5));
}

#[test]
fn test_cursor_out_of_bounds() {
    let vector = sample_vector();
    let list = sample_list();

    let expected = DstructsError::IndexOutOfBounds {
        index: 7,
        length: 6,
    };
    assert_eq!(vector.cursor(7).err(), Some(expected.clone()));
    assert_eq!(list.cursor(7).err(), Some(expected));
}

#[test]
fn test_cursor_on_empty_containers() {
    let vector: Vector<'_, u32> = Vector::new().unwrap();
    let list: LinkedList<'_, u32> = LinkedList::new();

    let mut vector_cursor = vector.cursor(0).unwrap();
    let mut list_cursor = list.cursor(0).unwrap();

    assert!(!vector_cursor.has_next() && !vector_cursor.has_prev());
    assert!(!list_cursor.has_next() && !list_cursor.has_prev());
    assert_eq!(vector_cursor.next(), None);
    assert_eq!(list_cursor.prev(), None);
}

#[test]
fn test_cursor_drains_remaining_as_iterator() {
    let vector = sample_vector();
    let list = sample_list();

    let cursor = vector.cursor(3).unwrap();
    assert_eq!(cursor.len(), 3);
    assert_eq!(cursor.copied().collect::<Vec<_>>(), [3, 4, 5]);

    let cursor = list.cursor(3).unwrap();
    assert_eq!(cursor.len(), 3);
    assert_eq!(cursor.copied().collect::<Vec<_>>(), [3, 4, 5]);
}

#[test]
fn test_cursor_clone_is_independent() {
    let list = sample_list();
    let mut cursor = list.cursor(1).unwrap();
    let mut copy = cursor.clone();

    assert_eq!(cursor.next(), Some(&1));
    assert_eq!(cursor.next(), Some(&2));
    assert_eq!(copy.next(), Some(&1));
    assert_eq!(copy.prev(), Some(&1));
}
