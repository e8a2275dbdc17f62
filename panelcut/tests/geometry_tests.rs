#[cfg(test)]
mod tests {
    use panelcut::CutError;
    use panelcut::entities::Part;
    use panelcut::geometry::{Dimension, Orientation, Rect};
    use panelcut::packer::{Shelf, ShelfInsertion, ShelfLayout};
    use test_case::test_case;

    fn dim(width: f32, height: f32) -> Dimension {
        Dimension::try_new(width, height).unwrap()
    }

    #[test_case(0.0, 0.0, 10.0, 5.0, true; "regular")]
    #[test_case(3.0, 2.0, 3.0, 8.0, false; "zero width")]
    #[test_case(0.0, 4.0, 10.0, 1.0, false; "inverted y")]
    fn rect_construction(x_min: f32, y_min: f32, x_max: f32, y_max: f32, valid: bool) {
        match Rect::try_new(x_min, y_min, x_max, y_max) {
            Ok(rect) => {
                assert!(valid);
                assert_eq!(rect.area(), (x_max - x_min) * (y_max - y_min));
            }
            Err(err) => {
                assert!(!valid);
                assert!(matches!(err, CutError::InvalidDimension { .. }));
            }
        }
    }

    #[test]
    fn touching_rects_do_not_collide() {
        let a = Rect::try_new(0.0, 0.0, 30.0, 20.0).unwrap();
        let right = Rect::try_new(30.0, 0.0, 60.0, 20.0).unwrap();
        let above = Rect::try_new(0.0, 20.0, 30.0, 40.0).unwrap();
        let overlapping = Rect::try_new(29.0, 19.0, 40.0, 25.0).unwrap();

        assert!(!a.collides_with(&right));
        assert!(!a.collides_with(&above));
        assert!(a.collides_with(&overlapping));
        assert!(overlapping.collides_with(&a));

        let sheet = Rect::from(dim(60.0, 40.0));
        assert!(sheet.contains_rect(&right));
        assert!(!sheet.contains_rect(&Rect::try_new(50.0, 30.0, 61.0, 40.0).unwrap()));
    }

    #[test_case((40.0, 90.0), (100.0, 50.0), false, true; "fits only rotated")]
    #[test_case((30.0, 20.0), (100.0, 50.0), true, true; "fits as given")]
    #[test_case((60.0, 60.0), (100.0, 50.0), false, false; "too large")]
    #[test_case((100.0, 50.0), (100.0, 50.0), true, true; "exact fit")]
    fn fit_tests(part: (f32, f32), stock: (f32, f32), as_given: bool, any: bool) {
        let (part, stock) = (dim(part.0, part.1), dim(stock.0, stock.1));
        assert_eq!(part.fits_within(&stock), as_given);
        assert_eq!(part.fits_within_any_orientation(&stock), any);
    }

    #[test]
    fn shelves_stack_upwards() {
        let mut layout = ShelfLayout::new(0, dim(100.0, 50.0));
        let parts = [
            Part::new(0, dim(30.0, 20.0)),
            Part::new(1, dim(40.0, 30.0)),
            Part::new(2, dim(10.0, 10.0)),
            Part::new(3, dim(50.0, 10.0)),
        ];

        let first = layout.find_insertion(&parts[0]).unwrap();
        assert!(matches!(first, ShelfInsertion::NewShelf(_)));
        layout.insert(first);
        assert_eq!(
            layout.shelves(),
            &[Shelf {
                y: 0.0,
                height: 20.0,
                x_cursor: 30.0
            }]
        );

        //too tall for the first shelf in both orientations
        let second = layout.find_insertion(&parts[1]).unwrap();
        assert!(matches!(second, ShelfInsertion::NewShelf(_)));
        assert_eq!(second.placement().orientation(), Orientation::AsGiven);
        layout.insert(second);
        assert_eq!(layout.used_height(), 50.0);

        for part in &parts[2..] {
            let insertion = layout.find_insertion(part).unwrap();
            assert!(matches!(insertion, ShelfInsertion::CurrentShelf(_)));
            layout.insert(insertion);
        }
        assert_eq!(
            layout.shelves(),
            &[
                Shelf {
                    y: 0.0,
                    height: 20.0,
                    x_cursor: 30.0
                },
                Shelf {
                    y: 20.0,
                    height: 30.0,
                    x_cursor: 100.0
                },
            ]
        );
        assert_eq!(layout.current_shelf().map(Shelf::top), Some(50.0));

        //current shelf is full and there is no room for another one
        assert_eq!(layout.find_insertion(&Part::new(4, dim(5.0, 5.0))), None);

        let sheet = layout.into_sheet();
        assert_eq!(
            sheet
                .placements
                .iter()
                .map(|p| (p.part_id(), p.x(), p.y()))
                .collect::<Vec<_>>(),
            vec![(0, 0.0, 0.0), (1, 0.0, 20.0), (2, 40.0, 20.0), (3, 50.0, 20.0)]
        );
    }
}
