use super::mesh::MeshData;
use glam::{Mat4, Quat, Vec3};

/// Parse a binary glTF into flat meshes with node transforms baked in.
///
/// Only data in the embedded BIN chunk is read; primitives that point at
/// external buffers or lack positions are skipped. A document without a single
/// triangle is an error.
pub fn parse_glb(bytes: &[u8]) -> anyhow::Result<Vec<MeshData>> {
    let gltf = gltf::Gltf::from_slice(bytes)?;
    let blob = gltf.blob.as_deref().unwrap_or(&[]);
    let document = &gltf.document;

    let roots: Vec<gltf::Node> = match document.default_scene().or_else(|| document.scenes().next()) {
        Some(scene) => scene.nodes().collect(),
        None => document.nodes().collect(),
    };

    let mut meshes = Vec::new();
    let mut stack: Vec<(gltf::Node, Mat4)> = roots.into_iter().map(|n| (n, Mat4::IDENTITY)).collect();
    while let Some((node, parent)) = stack.pop() {
        let (t, r, s) = node.transform().decomposed();
        let world = parent
            * Mat4::from_scale_rotation_translation(Vec3::from(s), Quat::from_array(r), Vec3::from(t));

        if let Some(mesh) = node.mesh() {
            for primitive in mesh.primitives() {
                if primitive.mode() != gltf::mesh::Mode::Triangles {
                    log::warn!(
                        "[model] skipping {:?} primitive in mesh {:?}",
                        primitive.mode(),
                        mesh.name()
                    );
                    continue;
                }
                let reader = primitive.reader(|buffer| match buffer.source() {
                    gltf::buffer::Source::Bin => Some(blob),
                    gltf::buffer::Source::Uri(_) => None,
                });
                let positions: Vec<[f32; 3]> = match reader.read_positions() {
                    Some(p) => p.collect(),
                    None => continue,
                };
                if positions.is_empty() {
                    continue;
                }
                let normals = reader.read_normals().map(|n| n.collect());
                let tex_coords = reader.read_tex_coords(0).map(|uv| uv.into_f32().collect());
                let tangents = reader.read_tangents().map(|t| t.collect());
                let indices = reader.read_indices().map(|i| i.into_u32().collect());

                let mut data = MeshData::from_attributes(positions, normals, tex_coords, tangents, indices);
                if data.triangle_count() == 0 {
                    continue;
                }
                data.transform(&world);
                meshes.push(data);
            }
        }
        for child in node.children() {
            stack.push((child, world));
        }
    }

    if meshes.is_empty() {
        anyhow::bail!("model contains no triangle meshes");
    }
    Ok(meshes)
}
