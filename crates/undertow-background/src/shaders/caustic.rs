//! Fragment stage of the caustic program, split into the pieces
//! [`super::CausticProgram`] stitches together per variant.

/// Water terms shared by every variant
pub const WATER_FUNCTIONS: &str = r#"
struct Water {
    caustics: f32,
    pattern: f32,
};

fn water_sample(p: vec2<f32>, t: f32) -> Water {
    let caustic1 = fbm(p + t * 0.2 + vec2<f32>(0.0, t * 0.15));
    let caustic2 = fbm(p * 1.5 - t * 0.15 + vec2<f32>(t * 0.1, 0.0));
    let caustic3 = fbm(p * 2.2 + vec2<f32>(t * 0.12, -t * 0.08));
    let caustics = pow(caustic1 * 0.5 + caustic2 * 0.3 + caustic3 * 0.2, 1.5);

    let wave1 = sin(p.x * 3.5 + t * 0.7) * cos(p.y * 2.8 - t * 0.5);
    let wave2 = sin(p.x * 5.2 - t * 0.9) * sin(p.y * 4.1 + t * 0.6);
    let wave3 = cos(p.x * 2.1 + t * 0.4) * sin(p.y * 3.3 - t * 0.8);
    let waves = (wave1 + wave2 * 0.7 + wave3 * 0.5) * 0.3 + 0.5;

    let distortion = vec2<f32>(
        sin(p.y * 4.0 + t * 0.5) * 0.02,
        cos(p.x * 3.5 + t * 0.6) * 0.02
    );
    let distorted = fbm(p + distortion + t * 0.1);

    var out: Water;
    out.caustics = caustics;
    out.pattern = mix(mix(caustics, waves, 0.3), distorted, 0.4);
    return out;
}
"#;

/// Pointer reveal: fog that clears around the eased mouse uniform
pub const FOG_FUNCTIONS: &str = r#"
fn edge_mask(uv: vec2<f32>) -> f32 {
    let x = smoothstep(0.0, EDGE_MASK_X, uv.x) * (1.0 - smoothstep(1.0 - EDGE_MASK_X, 1.0, uv.x));
    let y = smoothstep(0.0, EDGE_MASK_Y, uv.y) * (1.0 - smoothstep(1.0 - EDGE_MASK_Y, 1.0, uv.y));
    return x * y;
}

fn fog_reveal(uv: vec2<f32>, mouse: vec2<f32>, hover_strength: f32, t: f32) -> f32 {
    let fog1 = fbm(uv * 4.0 + t * 0.1);
    let fog2 = fbm(uv * 6.0 - t * 0.08 + vec2<f32>(t * 0.05, 0.0));
    let fog = (fog1 + fog2) * 0.5;

    let flow = vec2<f32>(
        sin(uv.y * 5.0 + t * 0.5) * 0.1,
        cos(uv.x * 4.0 + t * 0.4) * 0.1
    );
    let dist = length(uv - mouse + flow);

    let radius = FOG_BASE_RADIUS + fog * 0.1;
    var reveal = smoothstep(radius - FOG_FALLOFF, radius + FOG_FALLOFF, dist);
    reveal = mix(reveal, reveal * (0.8 + fog * 0.4), 0.6);

    let hovered = mix(1.0, reveal, hover_strength);
    return mix(1.0, hovered, edge_mask(uv));
}
"#;

pub const FRAGMENT_HEAD: &str = r#"
@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    let uv = in.uv;
    let t = uniforms.time;
    let p = uv * FIELD_SCALE;

    let water = water_sample(p, t);
    var pattern = water.pattern;
"#;

pub const MOUSE_GLOW: &str = r#"
    let to_mouse = uv - uniforms.mouse;
    pattern = pattern + exp(-dot(to_mouse, to_mouse) * MOUSE_GLOW_FALLOFF) * MOUSE_GLOW_STRENGTH;
"#;

pub const FRAGMENT_COLOR: &str = r#"
    var color = mix(DEEP_WATER, MID_WATER, pattern);
    color = mix(color, CAUSTIC_HIGHLIGHT, water.caustics * 0.5);

    let shimmer1 = pow(sin(uv.x * 25.0 + uv.y * 20.0 + t * 4.0) * 0.5 + 0.5, 3.0);
    let shimmer2 = pow(sin(uv.x * 18.0 - uv.y * 22.0 - t * 3.5) * 0.5 + 0.5, 4.0);
    color = mix(color, SHIMMER_HIGHLIGHT, (shimmer1 + shimmer2) * SHIMMER_WEIGHT);

    color = color * (1.0 - distance(uv, vec2<f32>(0.5, 0.5)) * VIGNETTE_STRENGTH);
"#;

pub const GRAIN: &str = r#"
    let grain = hash_noise(uv * uniforms.resolution * 0.5 + t * 10.0) * GRAIN_STRENGTH;
    color = color + vec3<f32>(grain, grain, grain);
"#;

pub const ALPHA_OPAQUE: &str = r#"
    var alpha: f32 = 1.0;
"#;

pub const ALPHA_TRANSLUCENT: &str = r#"
    var alpha: f32 = BASE_ALPHA + pattern * ALPHA_RANGE;
"#;

pub const FOG_APPLY: &str = r#"
    alpha = alpha * fog_reveal(uv, uniforms.mouse, uniforms.hover_strength, t);
"#;

pub const FRAGMENT_TAIL: &str = r#"
    return vec4<f32>(color, alpha);
}
"#;
