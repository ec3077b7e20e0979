use super::{OutOfRangeError, RegFile};

#[test]
fn new_file_is_zeroed() {
    let regs = RegFile::new(6);

    assert_eq!(regs.len(), 6);
    assert_eq!(regs.as_slice(), [0; 6]);
}

#[test]
fn reads_and_writes_in_range() {
    let mut regs = RegFile::from_values([3, 1, 0, 0]);

    assert_eq!(regs.register(0), Ok(3));

    *regs.register_mut(2).unwrap() = -5;
    assert_eq!(regs.as_slice(), [3, 1, -5, 0]);
}

#[test]
fn out_of_range_access_names_the_index() {
    let mut regs = RegFile::new(4);

    assert_eq!(regs.register(5), Err(OutOfRangeError { index: 5, len: 4 }));
    assert_eq!(
        regs.register_mut(4).unwrap_err(),
        OutOfRangeError { index: 4, len: 4 }
    );
}
