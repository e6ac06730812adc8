use crate::alloc::format;
use crate::alloc::vec::Vec;
use crate::{HipVec as H, LocalHipVec};

#[test]
fn test_indices() {
    let v = H::from([10, 20, 30, 40, 50]);
    let s = v.slice(2..5);

    assert_eq!(s.start_index(), 2);
    assert_eq!(s.end_index(), 5);
    assert_eq!(s.range(), 2..5);
    assert_eq!(s.len(), 3);
    assert!(!s.is_empty());

    assert_eq!(s[2], 30);
    assert_eq!(s[3], 40);
    assert_eq!(s[4], 50);
    assert_eq!(s.get(2), Some(&30));
    assert_eq!(s.get(4), Some(&50));
    assert_eq!(s.get(0), None);
    assert_eq!(s.get(1), None);
    assert_eq!(s.get(5), None);

    assert_eq!(s.first(), Some(&30));
    assert_eq!(s.last(), Some(&50));
}

#[test]
fn test_full_and_empty() {
    let v = H::from([1, 2, 3]);

    let all = v.slice(..);
    assert_eq!(all.range(), 0..3);
    assert_eq!(all.as_slice(), [1, 2, 3]);

    let empty = v.slice(1..1);
    assert_eq!(empty.len(), 0);
    assert!(empty.is_empty());
    assert_eq!(empty.get(1), None);
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
}

#[test]
#[should_panic(expected = "index out of bounds: the view covers 2..5 but the index is 0")]
fn test_index_before_view() {
    let v = H::from([10, 20, 30, 40, 50]);
    let s = v.slice(2..5);
    let _ = s[0];
}

#[test]
#[should_panic(expected = "index out of bounds: the view covers 2..5 but the index is 5")]
fn test_index_past_view() {
    let v = H::from([10, 20, 30, 40, 50]);
    let s = v.slice(2..5);
    let _ = s[5];
}

#[test]
fn test_no_copy() {
    let v = H::from([10, 20, 30, 40, 50]);
    let s = v.slice(2..5);

    assert!(!v.is_unique());
    assert!(!s.is_unique());
    assert_eq!(s.as_ptr(), v[2..].as_ptr());
}

#[test]
fn test_clone() {
    let v = H::from([10, 20, 30, 40, 50]);
    let s = v.slice(2..5);
    let t = s.clone();
    assert_eq!(t.range(), 2..5);
    assert_eq!(t.as_ptr(), s.as_ptr());
}

#[test]
fn test_set_detaches() {
    let v = H::from([10, 20, 30, 40, 50]);
    let mut s = v.slice(2..5);

    s.set(2, -1);
    assert_eq!(s[2], -1);
    assert_eq!(s[3], 40);
    assert_eq!(v.as_slice(), [10, 20, 30, 40, 50]);

    // detached: the view now owns a store of exactly its window,
    // indices unchanged
    assert!(s.is_unique());
    assert_eq!(s.range(), 2..5);
    assert_ne!(s.as_ptr(), v[2..].as_ptr());

    // further writes stay in place
    let p = s.as_ptr();
    s.set(3, -2);
    assert_eq!(s.as_ptr(), p);
    assert_eq!(s.to_vec(), [-1, -2, 50]);
}

#[test]
#[should_panic(expected = "index out of bounds: the view covers 2..5 but the index is 1")]
fn test_set_out_of_view() {
    let v = H::from([10, 20, 30, 40, 50]);
    let mut s = v.slice(2..5);
    s.set(1, -1);
}

#[test]
fn test_get_mut() {
    let v = H::from([10, 20, 30, 40, 50]);
    let mut s = v.slice(2..5);

    assert!(s.get_mut(1).is_none());
    assert!(s.get_mut(5).is_none());

    *s.get_mut(3).unwrap() = -1;
    assert_eq!(s[3], -1);
    assert_eq!(v[3], 40);
}

#[test]
fn test_as_mut_slice() {
    let v = H::from([10, 20, 30, 40, 50]);
    let mut s = v.slice(2..5);

    // shared with the parent: no mutable access without copying
    assert!(s.as_mut_slice().is_none());

    drop(v);
    // sole owner now
    let slice = s.as_mut_slice().unwrap();
    slice[0] = -1;
    assert_eq!(s[2], -1);
}

#[test]
fn test_to_mut_slice() {
    let v = H::from([10, 20, 30, 40, 50]);
    let mut s = v.slice(2..5);

    let slice = s.to_mut_slice();
    assert_eq!(slice.len(), 3);
    slice[1] = -1;
    assert_eq!(s[3], -1);
    assert_eq!(v[3], 40);
}

#[test]
fn test_write_isolation_between_views() {
    let v = H::from([10, 20, 30, 40, 50]);
    let mut a = v.slice(1..4);
    let b = v.slice(1..4);

    a.set(1, -1);
    assert_eq!(a[1], -1);
    assert_eq!(b[1], 20);
    assert_eq!(v[1], 20);
}

#[test]
fn test_parent_mutation_keeps_snapshot() {
    let mut v = H::from([10, 20, 30, 40, 50]);
    let s = v.slice(2..5);

    v.set(3, -1);
    v.push(60);
    assert_eq!(v.as_slice(), [10, 20, 30, -1, 50, 60]);
    assert_eq!(s[3], 40); // slice-time snapshot
    assert_eq!(s.to_vec(), [30, 40, 50]);
}

#[test]
fn test_survives_parent_drop() {
    let v = H::from([10, 20, 30, 40, 50]);
    let s = v.slice(2..5);
    drop(v);

    assert_eq!(s[2], 30);
    assert_eq!(s.to_vec(), [30, 40, 50]);
    assert!(s.is_unique());
}

#[test]
fn test_reslice() {
    let v = H::from([10, 20, 30, 40, 50]);
    let s = v.slice(1..5);

    let t = s.slice(2..4);
    assert_eq!(t.range(), 2..4);
    assert_eq!(t[2], 30);
    assert_eq!(t[3], 40);

    // unbounded ends default to the view's bounds
    let u = s.slice(..);
    assert_eq!(u.range(), 1..5);
    let w = s.slice(3..);
    assert_eq!(w.range(), 3..5);

    // still zero-copy
    assert_eq!(t.as_ptr(), v[2..].as_ptr());
}

#[test]
fn test_reslice_errors() {
    let v = H::from([10, 20, 30, 40, 50]);
    let s = v.slice(2..4);

    let err = s.try_slice(1..3).unwrap_err();
    assert_eq!(
        format!("{err}"),
        "start index 1 is out of bounds for view starting at 2"
    );

    let err = s.try_slice(2..5).unwrap_err();
    assert_eq!(format!("{err}"), "end index 5 is out of bounds for length 4");

    assert!(s.try_slice(3..2).is_err());
    assert!(s.try_slice(2..4).is_ok());
    assert!(s.try_slice(3..3).is_ok());
}

#[test]
fn test_to_vec_into_vec() {
    let v = H::from([10, 20, 30, 40, 50]);
    let s = v.slice(2..5);
    assert_eq!(s.to_vec(), [30, 40, 50]);

    // shared: copies
    let vec: Vec<_> = s.clone().into_vec();
    assert_eq!(vec, [30, 40, 50]);

    // prefix view, sole owner: reuses the buffer
    let v = H::from([1, 2, 3, 4, 5]);
    let p = v.as_ptr();
    let s = v.slice(0..3);
    drop(v);
    let vec = s.into_vec();
    assert_eq!(vec, [1, 2, 3]);
    assert_eq!(vec.as_ptr(), p);
}

#[test]
fn test_into_hipvec_rebases() {
    let v = H::from([10, 20, 30, 40, 50]);
    let s = v.slice(2..5);

    let w = H::from(s);
    assert_eq!(w.as_slice(), [30, 40, 50]);
    assert_eq!(w[0], 30); // rebased to zero
    assert_eq!(v.as_slice(), [10, 20, 30, 40, 50]);
}

#[test]
fn test_iter() {
    let v = H::from([10, 20, 30, 40, 50]);
    let s = v.slice(2..5);

    let collected: Vec<i32> = s.iter().copied().collect();
    assert_eq!(collected, [30, 40, 50]);

    let mut sum = 0;
    for &e in &s {
        sum += e;
    }
    assert_eq!(sum, 120);
}

#[test]
fn test_fmt() {
    let v = H::from([10, 20, 30, 40, 50]);
    assert_eq!(format!("{:?}", v.slice(2..5)), "[30, 40, 50]");
}

#[test]
fn test_local_backend() {
    let v = LocalHipVec::from([10, 20, 30, 40, 50]);
    let mut s = v.slice(2..5);
    s.set(2, -1);
    assert_eq!(s[2], -1);
    assert_eq!(v[2], 30);
}

#[test]
fn test_retains_whole_store() {
    // a narrow view keeps the whole backing store alive: the pointer it
    // reads through still points into the original allocation
    let v = H::from_elem(7, 1000);
    let first = v.as_ptr();
    let s = v.slice(0..1);
    drop(v);
    assert_eq!(s.as_ptr(), first);
    assert_eq!(s[0], 7);
}
