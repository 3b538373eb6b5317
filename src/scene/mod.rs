//! Scene composition: the whole cell, assembled.
//!
//! [`Cell`] owns the outer membrane shell, every organelle component, the
//! shared selection state, and the orbit distance. Each rendered frame it
//! snapshots a [`FrameState`] — root sway, membrane material, per-organelle
//! materials and transforms — for the consumer to upload. All mutation
//! happens on the event path or inside the per-frame snapshot; there are
//! no timers and no threads.

mod node;

use glam::{Quat, Vec3};
pub use node::{InstancedMesh, Material, Transform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animation::idle::sway_rotation;
use crate::camera::OrbitDistance;
use crate::error::PlasmacyteError;
use crate::geometry::mesh::uv_sphere;
use crate::geometry::{paths, SecretionPath};
use crate::input::{PointerEvent, ZoomDirection};
use crate::options::Options;
use crate::organelle::info::Catalog;
use crate::organelle::{
    AntibodyStream, Centrioles, FreeRibosomes, Golgi, Lysosomes,
    Microtubules, Mitochondria, Nucleus, Organelle, OrganelleId, Rer,
    Vesicles,
};
use crate::picking::PickingState;

/// Radius of the outer membrane shell (a uniformly scaled unit sphere).
pub const MEMBRANE_RADIUS: f32 = 4.2;

/// The selected organelle's floating label.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Display title from the reference catalog.
    pub text: String,
    /// World-space anchor above the organelle.
    pub anchor: Vec3,
}

/// One organelle's contribution to a frame.
#[derive(Debug, Clone)]
pub struct OrganelleFrame {
    /// Which organelle.
    pub id: OrganelleId,
    /// Material after the fade/hover rules.
    pub material: Material,
    /// Transform lists parallel to the organelle's mesh list.
    pub transforms: Vec<Vec<Transform>>,
    /// Floating label, present only while this organelle is selected.
    pub label: Option<Label>,
}

/// Snapshot of everything that changes frame to frame.
#[derive(Debug, Clone)]
pub struct FrameState {
    /// Idle sway applied to the whole assembly.
    pub root_rotation: Quat,
    /// Membrane shell transform.
    pub membrane_transform: Transform,
    /// Membrane shell material (fades out while anything is selected).
    pub membrane_material: Material,
    /// Per-organelle frame data, in composition order.
    pub organelles: Vec<OrganelleFrame>,
    /// Orbit distance for the consumer's camera.
    pub camera_distance: f32,
}

/// The assembled plasma cell.
pub struct Cell {
    organelles: Vec<Box<dyn Organelle>>,
    membrane_mesh: InstancedMesh,
    paths: Vec<SecretionPath>,
    picking: PickingState,
    camera: OrbitDistance,
    catalog: Catalog,
    opts: Options,
}

impl Cell {
    /// Compose the cell from a seed and options.
    ///
    /// All procedural generation happens here, once; re-renders only ever
    /// change opacity, emissive, and the animated particle transforms.
    pub fn new(seed: u64, opts: Options) -> Result<Self, PlasmacyteError> {
        let catalog = Catalog::load_embedded()?;
        let mut rng = StdRng::seed_from_u64(seed);

        let paths = paths::generate(&mut rng, opts.animation.path_count);
        log::info!(
            "composing cell: seed={seed}, {} secretion paths",
            paths.len()
        );

        let organelles: Vec<Box<dyn Organelle>> = vec![
            Box::new(Nucleus::new(&mut rng, &opts)),
            Box::new(Golgi::new(&mut rng, &opts)),
            Box::new(Rer::new(&mut rng, &opts)),
            Box::new(Mitochondria::new(&mut rng, &opts)),
            Box::new(Lysosomes::new(&mut rng, &opts)),
            Box::new(Centrioles::new(&opts)),
            Box::new(FreeRibosomes::new(&mut rng, &opts)),
            Box::new(Microtubules::new(&mut rng, &opts)),
            Box::new(Vesicles::new(&mut rng, paths.clone(), &opts)),
            Box::new(AntibodyStream::new(&mut rng, paths.clone(), &opts)),
        ];

        let membrane_mesh = InstancedMesh::single(
            uv_sphere(1.0, 64, 32),
            Transform {
                scale: Vec3::splat(MEMBRANE_RADIUS),
                ..Transform::IDENTITY
            },
        );

        Ok(Self {
            organelles,
            membrane_mesh,
            paths,
            picking: PickingState::new(),
            camera: OrbitDistance::new(opts.camera.clone()),
            catalog,
            opts,
        })
    }

    // -- Event path -------------------------------------------------------

    /// Route one pointer event into selection/hover state.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Click { hit } => {
                if self.picking.handle_click(hit) {
                    log::debug!(
                        "selection -> {:?}",
                        hit.map(OrganelleId::name)
                    );
                }
            }
            PointerEvent::Enter(id) => {
                self.picking.handle_enter(id);
                self.set_hover_flag(id, true);
            }
            PointerEvent::Leave(id) => {
                self.picking.handle_leave(id);
                self.set_hover_flag(id, false);
            }
        }
    }

    /// Apply a zoom signal from the overlay controls.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        self.camera.zoom(direction);
    }

    /// The "reset view" control: clear the selection and recenter the
    /// camera distance.
    pub fn reset_view(&mut self) {
        self.picking.clear();
        self.camera.reset();
    }

    fn set_hover_flag(&mut self, id: OrganelleId, hovered: bool) {
        for organelle in &mut self.organelles {
            if organelle.id() == id {
                organelle.set_hovered(hovered);
            }
        }
    }

    // -- Accessors --------------------------------------------------------

    /// The currently selected organelle.
    #[must_use]
    pub fn selection(&self) -> Option<OrganelleId> {
        self.picking.selection()
    }

    /// The composed organelle components (geometry lookup for consumers).
    #[must_use]
    pub fn organelles(&self) -> &[Box<dyn Organelle>] {
        &self.organelles
    }

    /// The membrane shell mesh.
    #[must_use]
    pub fn membrane_mesh(&self) -> &InstancedMesh {
        &self.membrane_mesh
    }

    /// The shared secretion path set.
    #[must_use]
    pub fn paths(&self) -> &[SecretionPath] {
        &self.paths
    }

    /// The organelle reference catalog (overlay panel text).
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.opts
    }

    // -- Per-frame snapshot ------------------------------------------------

    /// Snapshot the frame at the given elapsed time.
    ///
    /// Pure in `elapsed` for fixed selection/hover state: the same clock
    /// value always produces the same snapshot, so seeking and pausing
    /// are free.
    #[must_use]
    pub fn frame(&self, elapsed: f32) -> FrameState {
        let selection = self.picking.selection();

        let membrane_opacity = if selection.is_some() {
            self.opts.display.membrane_selected_opacity
        } else {
            self.opts.display.membrane_opacity
        };
        let membrane_material = Material {
            color: self.opts.colors.membrane,
            opacity: membrane_opacity,
            transparent: true,
            ..Material::matte([0.0; 3])
        };

        let organelles = self
            .organelles
            .iter()
            .map(|organelle| {
                let transforms = organelle.animate(elapsed).unwrap_or_else(
                    || {
                        organelle
                            .meshes()
                            .iter()
                            .map(|m| m.transforms.clone())
                            .collect()
                    },
                );
                let label = (self.opts.display.show_labels
                    && selection == Some(organelle.id()))
                .then(|| Label {
                    text: self
                        .catalog
                        .get(organelle.id())
                        .title
                        .clone(),
                    anchor: organelle.label_anchor(),
                });
                OrganelleFrame {
                    id: organelle.id(),
                    material: organelle.material(selection, &self.opts),
                    transforms,
                    label,
                }
            })
            .collect();

        FrameState {
            root_rotation: sway_rotation(elapsed, &self.opts.animation),
            membrane_transform: self.membrane_mesh.transforms[0],
            membrane_material,
            organelles,
            camera_distance: self.camera.distance(),
        }
    }
}
