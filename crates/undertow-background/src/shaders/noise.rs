/// Value noise and fBm, kept in lockstep with `crate::noise`
pub const NOISE_FUNCTIONS: &str = r#"
fn hash_noise(p: vec2<f32>) -> f32 {
    return fract(sin(dot(p, vec2<f32>(12.9898, 78.233))) * 43758.5453);
}

fn smooth_noise(p: vec2<f32>) -> f32 {
    let i = floor(p);
    let f = fract(p);
    let u = f * f * (3.0 - 2.0 * f);

    let a = hash_noise(i);
    let b = hash_noise(i + vec2<f32>(1.0, 0.0));
    let c = hash_noise(i + vec2<f32>(0.0, 1.0));
    let d = hash_noise(i + vec2<f32>(1.0, 1.0));

    return mix(mix(a, b, u.x), mix(c, d, u.x), u.y);
}

fn fbm(p: vec2<f32>) -> f32 {
    var value: f32 = 0.0;
    var amplitude: f32 = 0.5;
    var frequency: f32 = 2.0;

    for (var i: i32 = 0; i < FBM_OCTAVES; i = i + 1) {
        value = value + amplitude * smooth_noise(p * frequency);
        amplitude = amplitude * 0.5;
        frequency = frequency * 2.0;
    }
    return value;
}
"#;
