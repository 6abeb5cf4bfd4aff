//! Math types and sugar functions for Rhai scripts

use crate::math::{FloatExt, IntExt, QuatExt, Vec2Ext, Vec3Ext};
use crate::random::SharedRng;
use glam::{Quat, Vec2, Vec3, Vec3Swizzles};
use rhai::{Engine, Module, INT};
use tracing::debug;

// Scripts count in i64; anything past i32 saturates
fn to_i32(value: INT) -> i32 {
    value.clamp(i32::MIN as INT, i32::MAX as INT) as i32
}

/// Register Vec3, Vec2 and Quat plus the `math` module
pub fn register_math_types(engine: &mut Engine, rng: &SharedRng) {
    debug!("Registering math types");

    let vec3_rng = rng.clone();
    engine
        .register_type_with_name::<Vec3>("Vec3")
        .register_get("x", |v: &mut Vec3| v.x as f64)
        .register_set("x", |v: &mut Vec3, x: f64| v.x = x as f32)
        .register_get("y", |v: &mut Vec3| v.y as f64)
        .register_set("y", |v: &mut Vec3, y: f64| v.y = y as f32)
        .register_get("z", |v: &mut Vec3| v.z as f64)
        .register_set("z", |v: &mut Vec3, z: f64| v.z = z as f32)
        .register_fn("+", |a: Vec3, b: Vec3| a + b)
        .register_fn("-", |a: Vec3, b: Vec3| a - b)
        .register_fn("*", |a: Vec3, b: f64| a * b as f32)
        .register_fn("*", |a: f64, b: Vec3| b * a as f32)
        .register_fn("/", |a: Vec3, b: f64| a / b as f32)
        .register_fn("==", |a: &mut Vec3, b: Vec3| *a == b)
        .register_fn("!=", |a: &mut Vec3, b: Vec3| *a != b)
        .register_fn("length", |v: &mut Vec3| v.length() as f64)
        .register_fn("normalize", |v: &mut Vec3| v.normalize_or_zero())
        .register_fn("dot", |a: &mut Vec3, b: Vec3| a.dot(b) as f64)
        .register_fn("cross", |a: &mut Vec3, b: Vec3| a.cross(b))
        .register_fn("clamp_all_fields", |v: &mut Vec3, min: f64, max: f64| {
            v.clamp_all_fields(min as f32, max as f32)
        })
        .register_fn(
            "is_inside_range",
            |v: &mut Vec3, min: f64, max: f64, inclusive: bool| {
                v.is_inside_range(min as f32, max as f32, inclusive)
            },
        )
        .register_fn(
            "is_outside_range",
            |v: &mut Vec3, min: f64, max: f64, inclusive: bool| {
                v.is_outside_range(min as f32, max as f32, inclusive)
            },
        )
        .register_fn("round_to_multiple_of", |v: &mut Vec3, multiple: INT| {
            v.round_to_multiple_of(to_i32(multiple))
        })
        .register_fn("flip_yz", |v: &mut Vec3| v.flip_yz())
        .register_fn("xy_to_xz", |v: &mut Vec3| v.xy_to_xz())
        .register_fn("with_ground", |v: &mut Vec3, ground: Vec2| v.with_ground(ground))
        .register_fn("ground", |v: &mut Vec3| v.xz())
        .register_fn("remove_nans", |v: &mut Vec3| v.remove_nans())
        .register_fn(
            "remap_all",
            |v: &mut Vec3, from_min: f64, from_max: f64, to_min: f64, to_max: f64| {
                v.remap_all(from_min as f32, from_max as f32, to_min as f32, to_max as f32)
            },
        )
        .register_fn("look_rotation", |v: &mut Vec3, up: Vec3| v.look_rotation(up))
        .register_fn("from_to_rotation", |v: &mut Vec3, to: Vec3| {
            v.from_to_rotation(to)
        })
        .register_fn("euler_degrees_to_quat", |v: &mut Vec3| {
            v.euler_degrees_to_quat()
        })
        .register_fn("randomize_by_range", move |v: &mut Vec3, min: f64, max: f64| {
            vec3_rng.with(|rng| v.randomize_by_range(min as f32, max as f32, rng))
        })
        .register_fn("to_string", |v: &mut Vec3| {
            format!("Vec3({}, {}, {})", v.x, v.y, v.z)
        });

    let vec2_rng = rng.clone();
    engine
        .register_type_with_name::<Vec2>("Vec2")
        .register_get("x", |v: &mut Vec2| v.x as f64)
        .register_set("x", |v: &mut Vec2, x: f64| v.x = x as f32)
        .register_get("y", |v: &mut Vec2| v.y as f64)
        .register_set("y", |v: &mut Vec2, y: f64| v.y = y as f32)
        .register_fn("+", |a: Vec2, b: Vec2| a + b)
        .register_fn("-", |a: Vec2, b: Vec2| a - b)
        .register_fn("*", |a: Vec2, b: f64| a * b as f32)
        .register_fn("==", |a: &mut Vec2, b: Vec2| *a == b)
        .register_fn("!=", |a: &mut Vec2, b: Vec2| *a != b)
        .register_fn("length", |v: &mut Vec2| v.length() as f64)
        .register_fn("to_vec3_xz", |v: &mut Vec2, y: f64| v.to_vec3_xz(y as f32))
        .register_fn("remove_nans", |v: &mut Vec2| v.remove_nans())
        .register_fn("random_in_range", move |v: &mut Vec2| {
            vec2_rng.with(|rng| v.random_float_from_range(rng) as f64)
        })
        .register_fn("to_string", |v: &mut Vec2| format!("Vec2({}, {})", v.x, v.y));

    engine
        .register_type_with_name::<Quat>("Quat")
        .register_get("x", |q: &mut Quat| q.x as f64)
        .register_get("y", |q: &mut Quat| q.y as f64)
        .register_get("z", |q: &mut Quat| q.z as f64)
        .register_get("w", |q: &mut Quat| q.w as f64)
        .register_fn("*", |a: Quat, b: Quat| a * b)
        .register_fn("*", |a: Quat, b: Vec3| a * b)
        .register_fn("slerp", |a: &mut Quat, b: Quat, t: f64| a.slerp(b, t as f32))
        .register_fn("remove_nans", |q: &mut Quat| q.remove_nans())
        .register_fn("to_string", |q: &mut Quat| {
            format!("Quat({}, {}, {}, {})", q.x, q.y, q.z, q.w)
        });

    let mut math_module = Module::new();

    math_module.set_native_fn("rad", |degrees: f64| Ok(degrees.to_radians()));
    math_module.set_native_fn("deg", |radians: f64| Ok(radians.to_degrees()));
    math_module.set_native_fn("clamp", |x: f64, min: f64, max: f64| Ok(x.clamp(min, max)));
    math_module.set_native_fn("clamp01", |x: f64| Ok((x as f32).clamp01() as f64));
    math_module.set_native_fn("lerp", |a: f64, b: f64, t: f64| {
        Ok((a as f32).lerp_to(b as f32, t as f32) as f64)
    });
    math_module.set_native_fn("inverse_lerp", |from: f64, to: f64, value: f64| {
        Ok((value as f32).inverse_lerp_over(from as f32, to as f32) as f64)
    });
    math_module.set_native_fn(
        "remap",
        |x: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64, clamp: bool| {
            Ok((x as f32).remap(
                from_min as f32,
                from_max as f32,
                to_min as f32,
                to_max as f32,
                clamp,
            ) as f64)
        },
    );
    math_module.set_native_fn("move_towards", |current: f64, target: f64, max_delta: f64| {
        Ok((current as f32).move_towards(target as f32, max_delta as f32) as f64)
    });
    math_module.set_native_fn(
        "move_towards_angle",
        |current: f64, target: f64, max_delta: f64| {
            Ok((current as f32).move_towards_angle(target as f32, max_delta as f32) as f64)
        },
    );
    math_module.set_native_fn("delta_angle", |current: f64, target: f64| {
        Ok((current as f32).delta_angle(target as f32) as f64)
    });
    math_module.set_native_fn("repeat", |t: f64, length: f64| {
        Ok((t as f32).repeat(length as f32) as f64)
    });
    math_module.set_native_fn("ping_pong", |t: f64, length: f64| {
        Ok((t as f32).ping_pong(length as f32) as f64)
    });
    math_module.set_native_fn("approximately", |a: f64, b: f64| {
        Ok((a as f32).approximately(b as f32))
    });
    math_module.set_native_fn("round_to_decimal_points", |x: f64, points: INT| {
        Ok((x as f32).round_to_decimal_points(to_i32(points)) as f64)
    });
    math_module.set_native_fn("round_to_multiple_of", |x: f64, multiple: INT| {
        Ok((x as f32).round_to_multiple_of(to_i32(multiple)) as f64)
    });
    math_module.set_native_fn("gamma", |x: f64, abs_max: f64, gamma: f64| {
        Ok(FloatExt::gamma(x as f32, abs_max as f32, gamma as f32) as f64)
    });
    math_module.set_native_fn("is_power_of_two", |x: INT| Ok(to_i32(x).is_power_of_two()));
    math_module.set_native_fn("next_power_of_two", |x: INT| {
        Ok(to_i32(x).next_power_of_two() as INT)
    });
    math_module.set_native_fn("closest_power_of_two", |x: INT| {
        Ok(to_i32(x).closest_power_of_two() as INT)
    });

    math_module.set_var("PI", std::f64::consts::PI);
    math_module.set_var("TAU", std::f64::consts::TAU);
    math_module.set_var("E", std::f64::consts::E);

    engine.register_static_module("math", math_module.into());

    let mut vec3_module = Module::new();
    vec3_module.set_native_fn("create", |x: f64, y: f64, z: f64| {
        Ok(Vec3::new(x as f32, y as f32, z as f32))
    });
    vec3_module.set_native_fn("zero", || Ok(Vec3::ZERO));
    vec3_module.set_native_fn("one", || Ok(Vec3::ONE));
    vec3_module.set_native_fn("up", || Ok(Vec3::Y));
    vec3_module.set_native_fn("forward", || Ok(Vec3::NEG_Z));
    engine.register_static_module("Vec3", vec3_module.into());

    let mut vec2_module = Module::new();
    vec2_module.set_native_fn("create", |x: f64, y: f64| Ok(Vec2::new(x as f32, y as f32)));
    vec2_module.set_native_fn("zero", || Ok(Vec2::ZERO));
    engine.register_static_module("Vec2", vec2_module.into());

    let mut quat_module = Module::new();
    quat_module.set_native_fn("identity", || Ok(Quat::IDENTITY));
    quat_module.set_native_fn("from_rotation_y", |angle: f64| {
        Ok(Quat::from_rotation_y(angle as f32))
    });
    quat_module.set_native_fn("from_euler_degrees", |x: f64, y: f64, z: f64| {
        Ok(Vec3::new(x as f32, y as f32, z as f32).euler_degrees_to_quat())
    });
    engine.register_static_module("Quat", quat_module.into());

    debug!("Math types registered");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn math_engine() -> Engine {
        let mut engine = Engine::new();
        register_math_types(&mut engine, &SharedRng::from_seed(7));
        engine
    }

    #[test]
    fn test_vec3_registration() {
        let engine = math_engine();

        let result: Vec3 = engine.eval("Vec3::create(1.0, 2.0, 3.0)").unwrap();
        assert_eq!(result, Vec3::new(1.0, 2.0, 3.0));

        let result: f64 = engine.eval("Vec3::create(3.0, 4.0, 0.0).length()").unwrap();
        assert_eq!(result, 5.0);
    }

    #[test]
    fn test_vec3_sugar_methods() {
        let engine = math_engine();

        let result: Vec3 = engine.eval("Vec3::create(1.0, 2.0, 3.0).flip_yz()").unwrap();
        assert_eq!(result, Vec3::new(1.0, 3.0, 2.0));

        let result: Vec3 = engine
            .eval("Vec3::create(-4.0, 0.5, 9.0).clamp_all_fields(0.0, 1.0)")
            .unwrap();
        assert_eq!(result, Vec3::new(0.0, 0.5, 1.0));

        let result: bool = engine
            .eval("Vec3::create(0.5, 2.0, 0.5).is_outside_range(0.0, 1.0, true)")
            .unwrap();
        assert!(result);

        let result: Vec3 = engine
            .eval("Vec3::create(1.0, 5.0, 2.0).with_ground(Vec2::create(7.0, 8.0))")
            .unwrap();
        assert_eq!(result, Vec3::new(7.0, 5.0, 8.0));

        let result: Vec2 = engine.eval("Vec3::create(1.0, 5.0, 2.0).ground()").unwrap();
        assert_eq!(result, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_randomize_by_range_stays_in_range() {
        let engine = math_engine();

        for _ in 0..20 {
            let result: Vec3 = engine
                .eval("Vec3::zero().randomize_by_range(-0.5, 0.5)")
                .unwrap();
            assert!(result.cmpge(Vec3::splat(-0.5)).all());
            assert!(result.cmplt(Vec3::splat(0.5)).all());
        }
    }

    #[test]
    fn test_quat_registration() {
        let engine = math_engine();

        let result: Quat = engine.eval("Quat::identity()").unwrap();
        assert_eq!(result, Quat::IDENTITY);

        let result: Quat = engine.eval("Quat::from_euler_degrees(0.0, 90.0, 0.0)").unwrap();
        let expected = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        assert!(result.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_math_module() {
        let engine = math_engine();

        let result: f64 = engine.eval("math::rad(180.0)").unwrap();
        assert!((result - std::f64::consts::PI).abs() < 0.0001);

        let result: f64 = engine.eval("math::clamp01(3.0)").unwrap();
        assert_eq!(result, 1.0);

        let result: f64 = engine
            .eval("math::remap(5.0, 0.0, 10.0, 100.0, 200.0, true)")
            .unwrap();
        assert!((result - 150.0).abs() < 1e-4);

        let result: f64 = engine.eval("math::delta_angle(350.0, 10.0)").unwrap();
        assert!((result - 20.0).abs() < 1e-4);

        let result: INT = engine.eval("math::closest_power_of_two(100)").unwrap();
        assert_eq!(result, 128);
    }

    #[test]
    fn test_math_gamma_is_the_easing_curve() {
        let engine = math_engine();

        let result: f64 = engine.eval("math::gamma(0.5, 1.0, 2.0)").unwrap();
        assert!((result - 0.25).abs() < 1e-6);

        let result: f64 = engine.eval("math::gamma(-0.5, 1.0, 2.0)").unwrap();
        assert!((result + 0.25).abs() < 1e-6);

        let result: f64 = engine.eval("math::gamma(3.0, 1.0, 2.0)").unwrap();
        assert_eq!(result, 3.0);
    }
}
