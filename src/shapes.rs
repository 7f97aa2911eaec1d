use std::f64::consts::PI;

pub trait Shape {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

/// Isosceles triangle described by its base and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Self {
        Self { base, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl Shape for Triangle {
    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }

    fn perimeter(&self) -> f64 {
        let side = (self.height * self.height + (self.base / 2.0).powi(2)).sqrt();
        self.base + 2.0 * side
    }
}

pub fn perimeter(rectangle: &Rectangle) -> f64 {
    rectangle.perimeter()
}

pub fn area(shape: &dyn Shape) -> f64 {
    shape.area()
}

pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perimeter() {
        let rectangle = Rectangle::new(10.0, 15.0);
        assert_eq!(perimeter(&rectangle), 50.0);
    }

    #[test]
    fn test_area() {
        struct Case {
            name: &'static str,
            shape: Box<dyn Shape>,
            want: f64,
        }

        let cases = vec![
            Case { name: "rectangle", shape: Box::new(Rectangle::new(10.0, 15.0)), want: 150.0 },
            Case { name: "circle", shape: Box::new(Circle::new(10.0)), want: 314.1592653589793 },
            Case { name: "triangle", shape: Box::new(Triangle::new(12.0, 6.0)), want: 36.0 },
        ];

        for case in cases {
            let got = area(case.shape.as_ref());
            assert_eq!(got, case.want, "{}: expected {} got {}", case.name, case.want, got);
        }
    }

    #[test]
    fn test_perimeters_of_every_shape() {
        assert_eq!(Rectangle::new(2.0, 3.0).perimeter(), 10.0);
        assert!((Circle::new(1.0).perimeter() - 2.0 * PI).abs() < 1e-12);
        // 3-4-5 halves: base 6, height 4 gives two sides of 5.
        assert_eq!(Triangle::new(6.0, 4.0).perimeter(), 16.0);
    }

    #[test]
    fn test_total_area() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Rectangle::new(1.0, 2.0)),
            Box::new(Triangle::new(4.0, 1.0)),
        ];
        assert_eq!(total_area(&shapes), 4.0);
        assert_eq!(total_area(&[]), 0.0);
    }
}
