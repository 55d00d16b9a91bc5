use bouncebox_scene::MeshHandle;
use bytemuck::{Pod, Zeroable};

/// Vertex for solid (triangle-list) primitives.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Vertex for line-list primitives; carries its own color which is
/// multiplied by the instance tint.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// CPU-side geometry for one primitive.
///
/// Half-extents are 1.0 throughout so an object's scale doubles as its
/// collision half-extent.
pub enum MeshData {
    Solid {
        vertices: Vec<Vertex>,
        indices: Vec<u16>,
    },
    Lines { vertices: Vec<LineVertex> },
}

/// Build the geometry for a mesh handle.
pub fn build(handle: MeshHandle) -> MeshData {
    match handle {
        MeshHandle::Line => line_mesh(),
        MeshHandle::Box => box_mesh(),
        MeshHandle::Quad => quad_mesh(),
        MeshHandle::Pyramid => pyramid_mesh(),
        MeshHandle::Triangle => triangle_mesh(),
        MeshHandle::Axis => axis_mesh(),
    }
}

fn box_mesh() -> MeshData {
    let p = 1.0_f32;
    #[rustfmt::skip]
    let vertices = vec![
        // +Z face
        Vertex { position: [-p, -p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [ p, -p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [ p,  p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [-p,  p,  p], normal: [0.0, 0.0, 1.0] },
        // -Z face
        Vertex { position: [ p, -p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [-p, -p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [-p,  p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [ p,  p, -p], normal: [0.0, 0.0, -1.0] },
        // +X face
        Vertex { position: [ p, -p,  p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p, -p, -p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p,  p, -p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p,  p,  p], normal: [1.0, 0.0, 0.0] },
        // -X face
        Vertex { position: [-p, -p, -p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p, -p,  p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p,  p,  p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p,  p, -p], normal: [-1.0, 0.0, 0.0] },
        // +Y face
        Vertex { position: [-p,  p,  p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [ p,  p,  p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [ p,  p, -p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [-p,  p, -p], normal: [0.0, 1.0, 0.0] },
        // -Y face
        Vertex { position: [-p, -p, -p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [ p, -p, -p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [ p, -p,  p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [-p, -p,  p], normal: [0.0, -1.0, 0.0] },
    ];
    #[rustfmt::skip]
    let indices: Vec<u16> = vec![
        0,1,2, 2,3,0,       // +Z
        4,5,6, 6,7,4,       // -Z
        8,9,10, 10,11,8,    // +X
        12,13,14, 14,15,12, // -X
        16,17,18, 18,19,16, // +Y
        20,21,22, 22,23,20, // -Y
    ];
    MeshData::Solid { vertices, indices }
}

fn quad_mesh() -> MeshData {
    let n = [0.0, 0.0, 1.0];
    let vertices = vec![
        Vertex { position: [-1.0, -1.0, 0.0], normal: n },
        Vertex { position: [1.0, -1.0, 0.0], normal: n },
        Vertex { position: [1.0, 1.0, 0.0], normal: n },
        Vertex { position: [-1.0, 1.0, 0.0], normal: n },
    ];
    let indices = vec![0, 1, 2, 2, 3, 0];
    MeshData::Solid { vertices, indices }
}

fn pyramid_mesh() -> MeshData {
    // Apex at +Y, unit square base at -Y, flat-shaded sides.
    let apex = [0.0, 1.0, 0.0];
    let base = [
        [-1.0, -1.0, 1.0],
        [1.0, -1.0, 1.0],
        [1.0, -1.0, -1.0],
        [-1.0, -1.0, -1.0],
    ];
    // Side face normals: midway between base edge outward and up.
    let side_normals = [
        [0.0, 0.4472, 0.8944],  // +Z
        [0.8944, 0.4472, 0.0],  // +X
        [0.0, 0.4472, -0.8944], // -Z
        [-0.8944, 0.4472, 0.0], // -X
    ];
    let mut vertices = Vec::with_capacity(16);
    for (i, normal) in side_normals.iter().enumerate() {
        let a = base[i];
        let b = base[(i + 1) % 4];
        vertices.push(Vertex { position: a, normal: *normal });
        vertices.push(Vertex { position: b, normal: *normal });
        vertices.push(Vertex { position: apex, normal: *normal });
    }
    let down = [0.0, -1.0, 0.0];
    for position in [base[0], base[3], base[2], base[2], base[1], base[0]] {
        vertices.push(Vertex { position, normal: down });
    }
    let indices = (0..vertices.len() as u16).collect();
    MeshData::Solid { vertices, indices }
}

fn triangle_mesh() -> MeshData {
    let n = [0.0, 0.0, 1.0];
    let vertices = vec![
        Vertex { position: [-1.0, -1.0, 0.0], normal: n },
        Vertex { position: [1.0, -1.0, 0.0], normal: n },
        Vertex { position: [0.0, 1.0, 0.0], normal: n },
    ];
    let indices = vec![0, 1, 2];
    MeshData::Solid { vertices, indices }
}

fn line_mesh() -> MeshData {
    let color = [1.0, 1.0, 1.0, 1.0];
    MeshData::Lines {
        vertices: vec![
            LineVertex { position: [0.0, 0.0, 0.0], color },
            LineVertex { position: [1.0, 0.0, 0.0], color },
        ],
    }
}

/// Coordinate axis: X red, Y green, Z blue, 10 units each way.
fn axis_mesh() -> MeshData {
    let len = 10.0;
    let red = [1.0, 0.2, 0.2, 1.0];
    let green = [0.2, 1.0, 0.2, 1.0];
    let blue = [0.2, 0.4, 1.0, 1.0];
    MeshData::Lines {
        vertices: vec![
            LineVertex { position: [-len, 0.0, 0.0], color: red },
            LineVertex { position: [len, 0.0, 0.0], color: red },
            LineVertex { position: [0.0, -len, 0.0], color: green },
            LineVertex { position: [0.0, len, 0.0], color: green },
            LineVertex { position: [0.0, 0.0, -len], color: blue },
            LineVertex { position: [0.0, 0.0, len], color: blue },
        ],
    }
}
