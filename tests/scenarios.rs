use std::io::Cursor;

use largest_region::{find_regions, largest_region_size, Matrix, PromptError, Prompter, RegionError};

fn matrix(rows: &[Vec<u8>]) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

fn solve(input: &str) -> Result<usize, RegionError> {
    let mut prompter = Prompter::new(Cursor::new(input.as_bytes()), Vec::new());
    let matrix = prompter.read_matrix().unwrap();
    largest_region_size(&matrix)
}

#[test]
fn diagonal_pair() {
    assert_eq!(largest_region_size(&matrix(&[vec![1, 0], vec![0, 1]])), Ok(2));
}

#[test]
fn pairs_separated_by_an_empty_row() {
    let grid = matrix(&[vec![1, 1, 0], vec![0, 0, 0], vec![0, 1, 1]]);

    assert_eq!(find_regions(&grid).len(), 2);
    assert_eq!(largest_region_size(&grid), Ok(2));
}

#[test]
fn all_ones() {
    let grid = matrix(&[vec![1, 1, 1], vec![1, 1, 1], vec![1, 1, 1]]);

    assert_eq!(find_regions(&grid).len(), 1);
    assert_eq!(largest_region_size(&grid), Ok(9));
}

#[test]
fn all_zeros() {
    assert_eq!(
        largest_region_size(&matrix(&[vec![0, 0], vec![0, 0]])),
        Err(RegionError::NoRegions)
    );
}

#[test]
fn single_on_cell() {
    let grid = matrix(&[vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]]);
    assert_eq!(largest_region_size(&grid), Ok(1));
}

#[test]
fn largest_of_several() {
    let grid = matrix(&[
        vec![1, 0, 0, 1, 1],
        vec![1, 0, 0, 1, 1],
        vec![0, 0, 1, 0, 0],
        vec![0, 0, 0, 0, 0],
        vec![1, 0, 1, 1, 1],
    ]);

    // (2, 2) joins the top right block through (1, 3)
    let mut sizes: Vec<usize> = find_regions(&grid).iter().map(|region| region.len()).collect();
    sizes.sort();

    assert_eq!(sizes, vec![1, 2, 3, 5]);
    assert_eq!(largest_region_size(&grid), Ok(5));
}

#[test]
fn idempotent() {
    let grid = matrix(&[vec![1, 0, 1, 1], vec![0, 1, 0, 0], vec![1, 0, 0, 1]]);

    assert_eq!(largest_region_size(&grid), largest_region_size(&grid));
    assert_eq!(find_regions(&grid), find_regions(&grid));
}

#[test]
fn from_text_input() {
    assert_eq!(solve("3\n3\n1 1 0\n0 0 0\n0 1 1\n"), Ok(2));
    assert_eq!(solve("2\n2\n1 0\n0 1\n"), Ok(2));
    assert_eq!(solve("2\n2\n0 0\n0 0\n"), Err(RegionError::NoRegions));
    assert_eq!(solve("0\n0\n"), Err(RegionError::NoRegions));
}

#[test]
fn from_text_input_with_retries() {
    assert_eq!(solve("3\nthree\n3\n1 1 1 1\n1 1 1\n1 2 1\n0 0 0\n0 0 1\n"), Ok(3));
}

#[test]
fn large_checkerboard_is_one_region() {
    let size = 200;
    let rows: Vec<Vec<u8>> = (0..size)
        .map(|row| (0..size).map(|column| ((row + column) % 2 == 0) as u8).collect())
        .collect();

    assert_eq!(largest_region_size(&matrix(&rows)), Ok(size * size / 2));
}

#[test]
fn truncated_input_is_an_error() {
    let mut prompter = Prompter::new(Cursor::new("3\n2\n1 1\n".as_bytes()), Vec::new());

    match prompter.read_matrix() {
        Err(PromptError::UnexpectedEof { .. }) => {}
        other => panic!("expected UnexpectedEof, got {:?}", other),
    }
}
