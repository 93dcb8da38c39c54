use std::cmp::Ordering;

use rb_forest::{Adapter, Link, PackedLink, RbLink, RbTree, NIL};

#[derive(Debug)]
struct Rec<L> {
    key: i64,
    link: L,
}

struct ByKey<L>(std::marker::PhantomData<L>);

impl<L: RbLink> Adapter for ByKey<L> {
    type Record = Rec<L>;
    type Link = L;

    fn link(record: &Rec<L>) -> &L {
        &record.link
    }

    fn link_mut(record: &mut Rec<L>) -> &mut L {
        &mut record.link
    }
}

fn rb_cmp<L>(a: &Rec<L>, b: &Rec<L>) -> Ordering {
    a.key.cmp(&b.key)
}

type Tree<L> = RbTree<ByKey<L>, fn(&Rec<L>, &Rec<L>) -> Ordering>;

fn tree<L: RbLink>() -> Tree<L> {
    RbTree::with_comparator(rb_cmp::<L> as fn(&Rec<L>, &Rec<L>) -> Ordering)
}

fn arena<L: RbLink>(keys: &[i64]) -> Vec<Rec<L>> {
    keys.iter()
        .map(|&key| Rec {
            key,
            link: L::default(),
        })
        .collect()
}

fn slot_of<L>(arena: &[Rec<L>], key: i64) -> u32 {
    arena.iter().position(|r| r.key == key).expect("key in arena") as u32
}

fn in_order<L: RbLink>(tree: &Tree<L>, arena: &[Rec<L>]) -> Vec<i64> {
    tree.indices(arena).map(|i| arena[i as usize].key).collect()
}

fn insert_value<L: RbLink>(tree: &mut Tree<L>, arena: &mut [Rec<L>], key: i64) {
    let slot = slot_of(arena, key);
    tree.insert(arena, slot);
    if let Err(err) = tree.validate(arena) {
        panic!("invalid red-black tree after insert({key}): {err}");
    }
}

fn delete_value<L: RbLink>(tree: &mut Tree<L>, arena: &mut [Rec<L>], key: i64) {
    if let Some(slot) = tree.search_by(arena, |n| key.cmp(&n.key)) {
        tree.remove(arena, slot);
        if let Err(err) = tree.validate(arena) {
            panic!("invalid red-black tree after delete({key}): {err}");
        }
    }
}

fn various_numbers<L: RbLink>() {
    let keys = [10, 11, 12, 50, 60, 25, 100, 88, 33, 22, 55, 59, 51];
    let mut arena = arena::<L>(&keys);
    let mut tree = tree::<L>();

    for key in keys {
        insert_value(&mut tree, &mut arena, key);
    }
    assert_eq!(tree.len(&arena), 13);

    delete_value(&mut tree, &mut arena, 100);
    assert_eq!(tree.len(&arena), 12);

    delete_value(&mut tree, &mut arena, 33);
    delete_value(&mut tree, &mut arena, 33);
    assert_eq!(tree.len(&arena), 11);

    delete_value(&mut tree, &mut arena, 10);
    assert_eq!(tree.len(&arena), 10);

    delete_value(&mut tree, &mut arena, 60);
    assert_eq!(tree.len(&arena), 9);

    delete_value(&mut tree, &mut arena, 22);
    assert_eq!(tree.len(&arena), 8);
    assert_eq!(in_order(&tree, &arena), vec![11, 12, 25, 50, 51, 55, 59, 88]);
}

#[test]
fn rb_insert_delete_various_numbers_matrix() {
    various_numbers::<Link>();
    various_numbers::<PackedLink>();
}

#[test]
fn rb_numbers_from_0_to_100_matrix() {
    let keys: Vec<i64> = (0..=100).collect();
    let mut arena = arena::<Link>(&keys);
    let mut tree = tree::<Link>();

    for i in 0..=100 {
        insert_value(&mut tree, &mut arena, i);
        assert_eq!(tree.len(&arena), (i + 1) as usize);
    }
    for i in 0..=100 {
        delete_value(&mut tree, &mut arena, i);
        assert_eq!(tree.len(&arena), (100 - i) as usize);
    }
    assert!(tree.is_empty());
}

#[test]
fn rb_numbers_from_100_to_11_matrix() {
    let keys: Vec<i64> = (11..=100).rev().collect();
    let mut arena = arena::<PackedLink>(&keys);
    let mut tree = tree::<PackedLink>();

    for &key in &keys {
        insert_value(&mut tree, &mut arena, key);
    }
    for &key in &keys {
        delete_value(&mut tree, &mut arena, key);
    }
    assert_eq!(tree.root(), None);
}

#[test]
fn rb_numbers_both_directions_from_50_matrix() {
    let keys: Vec<i64> = (-50..=150).collect();
    let mut arena = arena::<Link>(&keys);
    let mut tree = tree::<Link>();

    for i in 0..=100 {
        insert_value(&mut tree, &mut arena, 50 + i);
        if i != 0 {
            insert_value(&mut tree, &mut arena, 50 - i);
        }
        assert_eq!(tree.len(&arena), (i * 2 + 1) as usize);
    }
    for i in 0..=100 {
        delete_value(&mut tree, &mut arena, 50 - i);
        delete_value(&mut tree, &mut arena, 50 + i);
    }
    assert_eq!(tree.root(), None);
}

#[test]
fn rb_seven_keys_shape_matrix() {
    let keys = [5, 3, 8, 1, 4, 7, 9];
    let mut arena = arena::<Link>(&keys);
    let mut tree = tree::<Link>();
    for key in keys {
        insert_value(&mut tree, &mut arena, key);
    }

    assert_eq!(in_order(&tree, &arena), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.print(&arena, |r| r.key), "5b[3b[1r..]<4r..>]<8b[7r..]<9r..>>");
    let shape = tree.validate(&arena).unwrap();
    assert_eq!(shape.len, 7);
    assert_eq!(shape.black_height, 2);
    assert_eq!(tree.black_height(&arena), 2);

    delete_value(&mut tree, &mut arena, 5);
    assert_eq!(in_order(&tree, &arena), vec![1, 3, 4, 7, 8, 9]);
    assert_eq!(tree.print(&arena, |r| r.key), "7b[3b[1r..]<4r..>]<8b.<9r..>>");
}

#[test]
fn rb_remove_resets_link_matrix() {
    let keys = [2, 1, 3];
    let mut arena = arena::<Link>(&keys);
    let mut tree = tree::<Link>();
    for key in keys {
        insert_value(&mut tree, &mut arena, key);
    }

    let root = tree.root().unwrap();
    assert_eq!(arena[root as usize].key, 2);
    tree.remove(&mut arena, root);
    assert_eq!(arena[root as usize].link, Link::default());
    assert_eq!(arena[root as usize].link.left(), NIL);
    tree.validate(&arena).unwrap();

    // A removed record goes back in without any reset by the caller.
    tree.insert(&mut arena, root);
    assert_eq!(in_order(&tree, &arena), vec![1, 2, 3]);
    tree.validate(&arena).unwrap();
}

#[test]
fn rb_clear_and_sentinel_matrix() {
    let keys = [1, 2, 3, 4];
    let mut arena = arena::<PackedLink>(&keys);
    let mut tree = tree::<PackedLink>();
    assert!(tree.is_empty());
    assert_eq!(tree.print(&arena, |r| r.key), ".");

    for key in keys {
        insert_value(&mut tree, &mut arena, key);
    }
    assert!(!tree.is_empty());
    assert!(!tree.nil().is_red());
    assert_eq!(tree.nil().left(), NIL);
    assert_eq!(tree.nil().right(), NIL);
    assert!(!tree.is_red(&arena, NIL));
    assert_eq!(tree.left(&arena, NIL), NIL);

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(&arena), 0);
    assert_eq!(tree.validate(&arena).unwrap().len, 0);
}

#[test]
fn rb_ord_records_matrix() {
    #[derive(Debug)]
    struct Word {
        text: &'static str,
        link: Link,
    }

    impl PartialEq for Word {
        fn eq(&self, other: &Self) -> bool {
            self.text == other.text
        }
    }

    impl Eq for Word {}

    impl PartialOrd for Word {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Word {
        fn cmp(&self, other: &Self) -> Ordering {
            self.text.cmp(other.text)
        }
    }

    struct Words;

    impl Adapter for Words {
        type Record = Word;
        type Link = Link;

        fn link(record: &Word) -> &Link {
            &record.link
        }

        fn link_mut(record: &mut Word) -> &mut Link {
            &mut record.link
        }
    }

    let mut arena: Vec<Word> = ["pear", "apple", "fig", "kiwi", "banana"]
        .into_iter()
        .map(|text| Word {
            text,
            link: Link::default(),
        })
        .collect();
    let mut tree = rb_forest::OrdTree::<Words>::new();
    for i in 0..arena.len() as u32 {
        tree.insert(&mut arena, i);
    }
    tree.validate(&arena).unwrap();

    let words: Vec<&str> = tree.indices(&arena).map(|i| arena[i as usize].text).collect();
    assert_eq!(words, vec!["apple", "banana", "fig", "kiwi", "pear"]);

    let probe = Word {
        text: "grape",
        link: Link::default(),
    };
    let next = tree.nsearch(&arena, &probe).unwrap();
    assert_eq!(arena[next as usize].text, "kiwi");
}

/// Keys 1, 2, 3 inserted from slots 0..3; slot 3 holds a second key 2 that
/// is never inserted.
fn with_twin_of_two<L: RbLink>() -> (Tree<L>, Vec<Rec<L>>) {
    let mut arena = arena::<L>(&[1, 2, 3, 2]);
    let mut tree = tree::<L>();
    for slot in 0..3 {
        tree.insert(&mut arena, slot);
    }
    (tree, arena)
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "compares equal to member")]
fn rb_insert_equal_key_panics_in_debug_matrix() {
    let (mut tree, mut arena) = with_twin_of_two::<Link>();
    tree.insert(&mut arena, 3);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "compares equal to record")]
fn rb_remove_equal_non_member_panics_in_debug_matrix() {
    let (mut tree, mut arena) = with_twin_of_two::<Link>();
    tree.remove(&mut arena, 3);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "is not a member")]
fn rb_remove_absent_key_panics_in_debug_matrix() {
    let mut arena = arena::<PackedLink>(&[1, 2, 3, 7]);
    let mut tree = tree::<PackedLink>();
    for slot in 0..3 {
        tree.insert(&mut arena, slot);
    }
    tree.remove(&mut arena, 3);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "sentinel is never written")]
fn rb_insert_sentinel_panics_in_debug_matrix() {
    let mut arena = arena::<Link>(&[1]);
    let mut tree = tree::<Link>();
    tree.insert(&mut arena, NIL);
}

#[cfg(not(debug_assertions))]
fn remove_non_member_is_noop<L: RbLink + Copy + std::fmt::Debug + PartialEq>() {
    let (mut tree, mut arena) = with_twin_of_two::<L>();
    let before = tree.print(&arena, |r| r.key);
    let member = arena[1].link;
    let stray = arena[3].link;

    tree.remove(&mut arena, 3);
    assert_eq!(in_order(&tree, &arena), vec![1, 2, 3]);
    assert_eq!(tree.print(&arena, |r| r.key), before);
    assert_eq!(arena[1].link, member);
    assert_eq!(arena[3].link, stray);
    tree.validate(&arena).unwrap();

    let mut arena_far = arena::<L>(&[1, 2, 3, 9]);
    let mut tree_far = tree::<L>();
    for slot in 0..3 {
        tree_far.insert(&mut arena_far, slot);
    }
    tree_far.remove(&mut arena_far, 3);
    assert_eq!(in_order(&tree_far, &arena_far), vec![1, 2, 3]);
    tree_far.validate(&arena_far).unwrap();
}

#[test]
#[cfg(not(debug_assertions))]
fn rb_remove_non_member_is_noop_in_release_matrix() {
    remove_non_member_is_noop::<Link>();
    remove_non_member_is_noop::<PackedLink>();
}
