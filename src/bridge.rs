pub trait RenderBridge {
    type Descriptor: Clone + std::fmt::Debug;
    type Surface;

    fn make_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self::Descriptor;

    fn make_box(&mut self, x: f32, y: f32, width: f32, height: f32) -> Self::Descriptor;

    fn make_ellipse(&mut self, x: f32, y: f32, width: f32, height: f32) -> Self::Descriptor {
        self.make_box(x, y, width, height)
    }

    fn clear(&self, surface: &mut Self::Surface);

    fn draw(&self, surface: &mut Self::Surface, descriptor: &Self::Descriptor);
}
