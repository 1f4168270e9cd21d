/// WGSL shader for pre-transformed, flat-colored triangles.
pub const BLOCK_SHADER: &str = r#"
struct VertexInput {
    @location(0) position: vec4<f32>,
    @location(1) color: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) @interpolate(flat) color: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = vertex.position;
    out.color = vertex.color;
    return out;
}

@fragment
fn fs_main(frag: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(frag.color, 1.0);
}
"#;
