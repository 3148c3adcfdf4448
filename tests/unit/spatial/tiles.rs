//! Tests for tile extraction and reassembly into a fresh buffer

#[cfg(test)]
mod tests {
    use image::{GrayImage, ImageBuffer, Luma};
    use retile::RearrangeError;
    use retile::spatial::tiles::{assemble, extract_tiles};
    use retile::spatial::{ImageSize, TileGrid, TileSize};

    fn gradient(width: u32, height: u32) -> GrayImage {
        ImageBuffer::from_fn(width, height, |x, y| Luma([(y * width + x) as u8]))
    }

    fn grid_for(image: &GrayImage, tile: TileSize) -> TileGrid {
        TileGrid::new(ImageSize::from(image.dimensions()), tile).unwrap()
    }

    // Tests tiles are extracted in linear order with their origins
    // Verified by extracting row-major
    #[test]
    fn test_extract_order_and_origins() {
        let image = gradient(4, 4);
        let grid = grid_for(&image, TileSize::square(2));
        let tiles = extract_tiles(&image, &grid);

        let origins: Vec<_> = tiles.iter().map(|tile| tile.origin).collect();
        assert_eq!(origins, vec![(0, 0), (0, 2), (2, 0), (2, 2)]);

        let positions: Vec<_> = tiles.iter().map(|tile| tile.grid_position).collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    // Tests tile pixels are copied from the right region
    // Verified by ignoring the origin offset
    #[test]
    fn test_extract_pixels() {
        let image = gradient(4, 4);
        let grid = grid_for(&image, TileSize::new(2, 4));
        let tiles = extract_tiles(&image, &grid);

        assert_eq!(tiles.len(), 2);
        let second = &tiles[1].pixels;
        assert_eq!(second.dimensions(), (2, 4));
        assert_eq!(second.get_pixel(0, 0).0, [2]);
        assert_eq!(second.get_pixel(1, 3).0, [15]);
    }

    // Tests assembly with the identity ordering rebuilds the source
    // Verified by starting from a copy of a different image
    #[test]
    fn test_assemble_identity() {
        let image = gradient(6, 3);
        let grid = grid_for(&image, TileSize::new(2, 1));
        let tiles = extract_tiles(&image, &grid);
        let ordering: Vec<usize> = grid.cells().collect();

        let output = assemble(&tiles, &grid, &ordering, |_, _| {}).unwrap();
        assert_eq!(output, image);
    }

    // Tests assembly places tiles[ordering[d]] into cell d
    // Verified by indexing tiles with d directly
    #[test]
    fn test_assemble_swaps_tiles() {
        let image = gradient(2, 1);
        let grid = grid_for(&image, TileSize::square(1));
        let tiles = extract_tiles(&image, &grid);

        let output = assemble(&tiles, &grid, &[1, 0], |_, _| {}).unwrap();
        assert_eq!(output.get_pixel(0, 0).0, [1]);
        assert_eq!(output.get_pixel(1, 0).0, [0]);
    }

    // Tests mismatched ordering length or out-of-range entries are refused
    // Verified by removing the length check
    #[test]
    fn test_assemble_rejects_mismatch() {
        let image = gradient(2, 2);
        let grid = grid_for(&image, TileSize::square(1));
        let tiles = extract_tiles(&image, &grid);

        let short = assemble(&tiles, &grid, &[0, 1, 2], |_, _| {});
        assert!(matches!(short, Err(RearrangeError::InvalidArguments)));

        let out_of_range = assemble(&tiles, &grid, &[0, 1, 2, 9], |_, _| {});
        assert!(matches!(out_of_range, Err(RearrangeError::InvalidArguments)));

        let missing_tiles = assemble(&tiles[..3], &grid, &[0, 1, 2, 3], |_, _| {});
        assert!(matches!(missing_tiles, Err(RearrangeError::InvalidArguments)));
    }
}
