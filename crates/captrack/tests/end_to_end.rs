use approx::assert_relative_eq;
use glam::{DQuat, DVec3};

use captrack::align::{Anchor, FiducialPose};
use captrack::geometry::{Sphere, SurfaceSet};
use captrack::layout::Layout;
use captrack::scene::{
    project_layout, update_visibility, CalibrationSession, FiducialDisplay, HeadFrame,
    LandmarkLocator, ProjectorConfig,
};

#[derive(Default)]
struct StubDisplay {
    visible: Option<bool>,
}

impl FiducialDisplay for StubDisplay {
    fn set_visible(&mut self, visible: bool) {
        self.visible = Some(visible);
    }
}

#[test]
fn test_place_calibrate_and_compose() -> Result<(), Box<dyn std::error::Error>> {
    // place the cap onto a spherical head model
    let layout = Layout::standard_cap()?;
    let config = ProjectorConfig::default();
    let mut surfaces = SurfaceSet::new();
    surfaces.insert("head", Box::new(Sphere::new(DVec3::ZERO, 0.09)));

    let mut placed = project_layout(&layout, &surfaces, &config);
    assert_eq!(placed.len(), layout.len());
    for landmark in &placed {
        // every electrode lands on the head sphere
        assert_relative_eq!(landmark.position.length(), 0.09, epsilon = 1e-9);
    }

    // the head moved: markers report the layout under a rigid motion
    let locator = LandmarkLocator::from_landmarks(&placed);
    let mut session = CalibrationSession::new();
    let mut display = StubDisplay::default();

    let rotation = DQuat::from_axis_angle(DVec3::new(0.1, 1.0, 0.2).normalize(), 0.35);
    let translation = DVec3::new(0.05, 1.4, -0.2);
    let reference = session.reference_anchors(&locator);
    for anchor in Anchor::ALL {
        let observed = rotation * reference.get(anchor) + translation;
        session.observe(anchor as i32, FiducialPose::at(observed));
    }

    let result = session.calibrate(&locator, &mut display, None)?;
    assert_eq!(display.visible, Some(false));

    // the committed frame reproduces the observed anchor positions
    let head = HeadFrame {
        alignment: *session.frame(),
        ..Default::default()
    };
    for anchor in Anchor::ALL {
        let mapped = head.transform_point(reference.get(anchor));
        let observed = rotation * reference.get(anchor) + translation;
        assert_relative_eq!(mapped.x, observed.x, epsilon = 1e-4);
        assert_relative_eq!(mapped.y, observed.y, epsilon = 1e-4);
        assert_relative_eq!(mapped.z, observed.z, epsilon = 1e-4);
    }
    assert_relative_eq!(result.scale.x, 1.0, epsilon = 1e-9);

    // per-frame culling against a viewer in front of the head
    update_visibility(&mut placed, Some(DVec3::new(0.0, 0.0, 0.3)), 0.35);
    assert!(placed.iter().any(|landmark| landmark.visible));
    assert!(placed.iter().any(|landmark| !landmark.visible));

    Ok(())
}
