use glam::{Vec3, vec3};

// The globe's three-step gray cycle. Callers thread the index explicitly;
// there is no shared cursor.
pub const PALETTE: [u32; 3] = [0x666666, 0x888888, 0xAAAAAA];

pub const HIGHLIGHT: Vec3 = vec3(0.0, 1.0, 1.0);

pub fn color(index: usize) -> Vec3 {
    from_hex(PALETTE[index % PALETTE.len()])
}

pub fn from_hex(hex: u32) -> Vec3 {
    vec3(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}
