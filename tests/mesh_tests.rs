// Host-side tests for procedural meshes and glTF import.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene_core {
    pub mod bounds {
        include!("../src/core/bounds.rs");
    }
    pub mod mesh {
        include!("../src/core/mesh.rs");
    }
    pub mod model {
        include!("../src/core/model.rs");
    }
}
use glam::{Mat4, Vec3};
use scene_core::mesh::*;
use scene_core::model::parse_glb;

fn face_normal(m: &MeshData, tri: usize) -> Vec3 {
    let i = &m.indices[tri * 3..tri * 3 + 3];
    let p = |k: usize| Vec3::from(m.vertices[i[k] as usize].position);
    (p(1) - p(0)).cross(p(2) - p(0)).normalize()
}

#[test]
fn box_has_one_group_per_side_in_order() {
    let m = box_mesh(Vec3::new(1.2, 0.6, 0.08));
    assert_eq!(m.vertices.len(), 24);
    assert_eq!(m.indices.len(), 36);
    assert_eq!(m.groups.len(), 6);
    let expected = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];
    for (slot, (group, n)) in m.groups.iter().zip(expected).enumerate() {
        assert_eq!(group.material, slot);
        assert_eq!(group.start, slot as u32 * 6);
        assert_eq!(group.count, 6);
        let tri = group.start as usize / 3;
        assert!((face_normal(&m, tri) - n).length() < 1e-5, "slot {}", slot);
        assert!((face_normal(&m, tri + 1) - n).length() < 1e-5, "slot {}", slot);
    }
}

#[test]
fn box_extents_match_size() {
    let size = Vec3::new(1.2, 0.6, 0.08);
    let b = box_mesh(size).bounds();
    assert!((b.size() - size).length() < 1e-6);
    assert!(((b.min + b.max) * 0.5).length() < 1e-6);
}

#[test]
fn box_front_face_uv_is_upright() {
    let m = box_mesh(Vec3::ONE);
    let front = &m.vertices[16..20];
    // top-left corner of +Z carries uv (0, 0)
    assert_eq!(front[0].tex_coord, [0.0, 0.0]);
    assert!(front[0].position[0] < 0.0 && front[0].position[1] > 0.0);
}

#[test]
fn circle_fans_around_centre() {
    let m = circle(4.0, 64);
    assert_eq!(m.vertices.len(), 66);
    assert_eq!(m.triangle_count(), 64);
    assert_eq!(m.groups.len(), 1);
    for tri in 0..m.triangle_count() {
        assert!((face_normal(&m, tri) - Vec3::Z).length() < 1e-4);
    }
    let b = m.bounds();
    assert!((b.max.x - 4.0).abs() < 1e-5);
    assert!((b.min.y + 4.0).abs() < 1e-5);
}

#[test]
fn circle_laid_flat_faces_up() {
    let mut m = circle(1.0, 16);
    m.transform(&Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2));
    for v in &m.vertices {
        assert!((Vec3::from(v.normal) - Vec3::Y).length() < 1e-5);
        assert!(v.position[1].abs() < 1e-5);
    }
    assert!((face_normal(&m, 0) - Vec3::Y).length() < 1e-4);
}

#[test]
fn missing_attributes_are_filled_in() {
    let m = MeshData::from_attributes(
        vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        None,
        None,
        None,
        None,
    );
    assert_eq!(m.indices, vec![0, 1, 2]);
    for v in &m.vertices {
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
        assert_eq!(v.tex_coord, [0.0, 0.0]);
    }
    assert_eq!(m.groups[0].count, 3);
}

#[test]
fn out_of_range_triangles_are_dropped() {
    let m = MeshData::from_attributes(
        vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        None,
        None,
        None,
        Some(vec![0, 1, 2, 0, 2, 7, 1]),
    );
    assert_eq!(m.indices, vec![0, 1, 2]);
    assert_eq!(m.triangle_count(), 1);
}

#[test]
fn tangents_follow_u_direction() {
    let m = box_mesh(Vec3::ONE);
    // +Z face: u runs along +X
    for v in &m.vertices[16..20] {
        assert_eq!(v.tangent, [1.0, 0.0, 0.0, 1.0]);
    }
    let t = compute_tangents(
        &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        &[[0.0, 0.0, 1.0]; 3],
        &[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
        &[0, 1, 2],
    );
    for v in t {
        assert!((Vec3::new(v[0], v[1], v[2]) - Vec3::X).length() < 1e-5);
        assert_eq!(v[3], 1.0);
    }
}

#[test]
fn mirroring_transform_keeps_faces_outward() {
    let mut m = box_mesh(Vec3::ONE);
    m.transform(&Mat4::from_scale(Vec3::new(-1.0, 1.0, 1.0)));
    // +X group now sits on -X and must still face away from the centre
    let n = face_normal(&m, 0);
    assert!((n - Vec3::NEG_X).length() < 1e-5);
    assert!((Vec3::from(m.vertices[0].normal) - Vec3::NEG_X).length() < 1e-5);
    assert_eq!(m.vertices[0].tangent[3], -1.0);
}

/// Minimal binary glTF: one triangle, positions only, one node translated up by 2.
fn triangle_glb() -> Vec<u8> {
    let positions: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let bin: Vec<u8> = positions.iter().flat_map(|f| f.to_le_bytes()).collect();
    let json = r#"{"asset":{"version":"2.0"},"scene":0,"scenes":[{"nodes":[0]}],"nodes":[{"mesh":0,"translation":[0,2,0]}],"meshes":[{"primitives":[{"attributes":{"POSITION":0}}]}],"accessors":[{"bufferView":0,"componentType":5126,"count":3,"type":"VEC3","min":[0,0,0],"max":[1,1,0]}],"bufferViews":[{"buffer":0,"byteLength":36}],"buffers":[{"byteLength":36}]}"#;
    let mut json = json.as_bytes().to_vec();
    while json.len() % 4 != 0 {
        json.push(b' ');
    }
    let total = 12 + 8 + json.len() + 8 + bin.len();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json.len() as u32).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&json);
    out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    out.extend_from_slice(b"BIN\0");
    out.extend_from_slice(&bin);
    out
}

#[test]
fn glb_triangle_is_imported_with_node_transform() {
    let meshes = parse_glb(&triangle_glb()).unwrap();
    assert_eq!(meshes.len(), 1);
    let m = &meshes[0];
    assert_eq!(m.triangle_count(), 1);
    let b = m.bounds();
    assert!((b.min.y - 2.0).abs() < 1e-6);
    assert!((b.max.y - 3.0).abs() < 1e-6);
    assert_eq!(m.vertices[0].normal, [0.0, 0.0, 1.0]);
}

#[test]
fn garbage_bytes_are_an_error() {
    assert!(parse_glb(b"definitely not a model").is_err());
    assert!(parse_glb(&[]).is_err());
}
