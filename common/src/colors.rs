use palette::Srgb;

pub type Color = Srgb;

pub const CLEAR: Color = Color::new(0.2, 0.3, 0.3);
pub const PINK: Color = Color::new(1.0, 0.2, 0.6);

pub trait ColorExt {
    fn to_rgba_array(self) -> [f32; 4];
    fn to_rgba_tuple(self) -> (f32, f32, f32, f32);
}

impl ColorExt for Color {
    fn to_rgba_array(self) -> [f32; 4] {
        [self.red, self.green, self.blue, 1.0]
    }

    fn to_rgba_tuple(self) -> (f32, f32, f32, f32) {
        let [red, green, blue, alpha] = self.to_rgba_array();

        (red, green, blue, alpha)
    }
}
