use image::Rgba;
use image::RgbaImage;

fn main() {
    // Create a 320x240 test image: white background, black disc, gray ring
    let mut img = RgbaImage::new(320, 240);

    let (cx, cy) = (160.0f32, 120.0f32);
    for y in 0..240 {
        for x in 0..320 {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let dist = (dx * dx + dy * dy).sqrt();

            let color = if dist < 50.0 {
                Rgba([0, 0, 0, 255])
            } else if dist < 70.0 {
                Rgba([128, 128, 128, 255])
            } else {
                Rgba([255, 255, 255, 255])
            };
            img.put_pixel(x, y, color);
        }
    }

    std::fs::create_dir_all("data").unwrap();
    img.save("data/test.png").unwrap();
    println!("Created data/test.png");
}
